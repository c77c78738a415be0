//! Notes service: the five CRUD operations over a [`NoteRepository`].
//!
//! Input validation happens here, before any store call. Not-found,
//! validation and storage failures stay distinct `notes_core::Error`
//! variants so the HTTP layer can map each to its own status code.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use notes_core::{Note, NoteInput, NoteRepository, Result};

/// Thin orchestration layer over an injected note store.
#[derive(Clone)]
pub struct NotesService {
    repo: Arc<dyn NoteRepository>,
}

impl NotesService {
    pub fn new(repo: Arc<dyn NoteRepository>) -> Self {
        Self { repo }
    }

    /// All notes, in insertion order.
    pub async fn list_notes(&self) -> Result<Vec<Note>> {
        let start = Instant::now();
        let notes = self.repo.list().await?;
        debug!(
            subsystem = "api",
            component = "notes_service",
            op = "list",
            result_count = notes.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Listed notes"
        );
        Ok(notes)
    }

    pub async fn get_note(&self, id: i64) -> Result<Note> {
        let start = Instant::now();
        let note = self.repo.fetch(id).await?;
        debug!(
            subsystem = "api",
            component = "notes_service",
            op = "fetch",
            note_id = id,
            duration_ms = start.elapsed().as_millis() as u64,
            "Fetched note"
        );
        Ok(note)
    }

    /// Validate and insert a new note. Server-derived fields are never taken
    /// from the input.
    pub async fn create_note(&self, input: NoteInput) -> Result<Note> {
        let req = input.into_create()?;
        let start = Instant::now();
        let note = self.repo.insert(req).await?;
        info!(
            subsystem = "api",
            component = "notes_service",
            op = "insert",
            note_id = note.id,
            duration_ms = start.elapsed().as_millis() as u64,
            "Created note"
        );
        Ok(note)
    }

    /// Replace a note's title and text.
    pub async fn update_note(&self, id: i64, input: NoteInput) -> Result<Note> {
        let req = input.into_update()?;
        let start = Instant::now();
        let note = self.repo.update(id, req).await?;
        info!(
            subsystem = "api",
            component = "notes_service",
            op = "update",
            note_id = id,
            duration_ms = start.elapsed().as_millis() as u64,
            "Updated note"
        );
        Ok(note)
    }

    pub async fn delete_note(&self, id: i64) -> Result<()> {
        let start = Instant::now();
        self.repo.delete(id).await?;
        info!(
            subsystem = "api",
            component = "notes_service",
            op = "delete",
            note_id = id,
            duration_ms = start.elapsed().as_millis() as u64,
            "Deleted note"
        );
        Ok(())
    }

    /// Check that the store is reachable.
    pub async fn health(&self) -> Result<()> {
        self.repo.ping().await
    }
}
