//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, navigation, the Google
//! script) from page and controller logic to improve reuse and testability.

pub mod auth;
pub mod google_identity;
pub mod navigator;
pub mod session_store;
