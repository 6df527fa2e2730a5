//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate router/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod auth;
