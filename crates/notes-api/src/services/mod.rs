//! Service layer for notes-api.

pub mod notes_service;

pub use notes_service::NotesService;
