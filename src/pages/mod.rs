//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages own form state and call into `AuthHandle`; status display is
//! delegated to `components::auth_notice`.

pub mod account;
pub mod home;
pub mod login;
pub mod register;
