//! Networking modules for the chat and support endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the JSON wire schema, `api` performs the POST calls with a
//! per-request timeout, and `cancel` provides the token that aborts them.

pub mod api;
pub mod cancel;
pub mod types;
