//! Client-side state modules.

pub mod login;
