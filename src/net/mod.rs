//! Networking modules for the dashboard REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the injected capabilities and their HTTP implementation,
//! `error` the failure kinds, and `types` the shared wire schema.

pub mod api;
pub mod error;
pub mod types;
