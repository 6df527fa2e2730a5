//! Networking modules for the users REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the wire schema shared
//! with the session state.

pub mod api;
pub mod types;
