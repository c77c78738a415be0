//! # notes-client
//!
//! Async client for the notes HTTP API.
//!
//! ```no_run
//! use notes_client::{NoteInput, NotesClient};
//!
//! # async fn run() -> notes_client::Result<()> {
//! let client = NotesClient::from_env()?;
//! let note = client.create_note(&NoteInput::new("Groceries", "Milk")).await?;
//! client.delete_note(note.id).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;

pub use client::{ClientConfig, NotesClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use error::{ClientError, Result};
pub use notes_core::{Note, NoteInput};
