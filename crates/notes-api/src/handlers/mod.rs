//! HTTP handlers for notes-api.

pub mod notes;
pub mod system;
