//! # notes-api
//!
//! HTTP surface for the notes service: an axum router mapping
//! `GET/POST /notes` and `GET/PUT/DELETE /notes/{id}` onto [`NotesService`],
//! plus configuration, error mapping and tracing setup used by the binary.

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod openapi;
pub mod router;
pub mod services;

use std::sync::Arc;

use notes_core::NoteRepository;

pub use config::ApiConfig;
pub use error::ApiError;
pub use router::build_router;
pub use services::NotesService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub notes: NotesService,
}

impl AppState {
    /// Build state around an injected note store.
    pub fn new(repo: Arc<dyn NoteRepository>) -> Self {
        Self {
            notes: NotesService::new(repo),
        }
    }
}
