//! Networking modules for the posts REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the shared wire schema, `api` performs the HTTP calls,
//! and `ops` dispatches one operation per user intent against the shared
//! state signals.

pub mod api;
pub mod ops;
pub mod types;
