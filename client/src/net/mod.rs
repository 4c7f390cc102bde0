//! Networking modules for the banking backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and `types` defines the wire schema.

pub mod api;
pub mod types;
