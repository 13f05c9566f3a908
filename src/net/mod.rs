//! Networking modules for the auth service HTTP boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls and maps responses onto outcomes;
//! `types` defines the wire schema shared with the auth service.

pub mod api;
pub mod types;
