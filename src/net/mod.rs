//! Networking modules for the authentication backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `types` defines the wire schema and the
//! persisted session, and `error` the typed failures of both.

pub mod api;
pub mod error;
pub mod types;
