//! Client-side session state.
//!
//! DESIGN
//! ======
//! `auth` is plain data with synchronous transitions; `session` is the async
//! driver that calls the users API and applies results to it.

pub mod auth;
pub mod session;
