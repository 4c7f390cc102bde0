//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is provided through Leptos context rather than module globals, so
//! tests and server rendering can build their own instances.

pub mod auth;
