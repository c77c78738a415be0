//! In-memory note repository.
//!
//! Follows the same id and timestamp rules as [`crate::PgNoteRepository`],
//! which lets HTTP and service tests run without a database.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use notes_core::{
    temporal, CreateNoteRequest, Error, Note, NoteRepository, Result, UpdateNoteRequest,
};

#[derive(Default)]
struct MemoryState {
    notes: BTreeMap<i64, Note>,
    last_id: i64,
}

/// Process-local implementation of NoteRepository.
///
/// Clones share the same underlying map.
#[derive(Clone, Default)]
pub struct MemoryNoteRepository {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteRepository for MemoryNoteRepository {
    async fn insert(&self, req: CreateNoteRequest) -> Result<Note> {
        let mut state = self.state.write().await;
        state.last_id += 1;
        let now = temporal::now_utc();
        let note = Note {
            id: state.last_id,
            title: req.title,
            text: req.text,
            created_at: now,
            updated_at: now,
        };
        state.notes.insert(note.id, note.clone());
        Ok(note)
    }

    async fn fetch(&self, id: i64) -> Result<Note> {
        self.state
            .read()
            .await
            .notes
            .get(&id)
            .cloned()
            .ok_or(Error::NoteNotFound(id))
    }

    async fn list(&self) -> Result<Vec<Note>> {
        Ok(self.state.read().await.notes.values().cloned().collect())
    }

    async fn update(&self, id: i64, req: UpdateNoteRequest) -> Result<Note> {
        let mut state = self.state.write().await;
        let note = state.notes.get_mut(&id).ok_or(Error::NoteNotFound(id))?;
        note.title = req.title;
        note.text = req.text;
        note.updated_at = temporal::next_updated_at(note.updated_at, temporal::now_utc());
        Ok(note.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.state
            .write()
            .await
            .notes
            .remove(&id)
            .map(|_| ())
            .ok_or(Error::NoteNotFound(id))
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        Ok(self.state.read().await.notes.contains_key(&id))
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
