//! # notes-core
//!
//! Core types, traits, and abstractions for the notes service.
//!
//! This crate provides the note entity, its validated input shapes, the
//! repository trait that storage backends implement, and the shared error
//! type that other crates depend on.

pub mod error;
pub mod logging;
pub mod models;
pub mod temporal;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use traits::*;
