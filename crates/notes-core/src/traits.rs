//! Core traits for the notes service.
//!
//! These traits define the interfaces that concrete implementations
//! must satisfy, enabling pluggable backends and testability.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::*;

// =============================================================================
// NOTE REPOSITORY TRAITS
// =============================================================================

/// Repository for note CRUD operations.
///
/// Implementations own id assignment and timestamp stamping. Every method is
/// a single atomic store operation; concurrent updates to one note are
/// last-write-wins.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Insert a new note and return the stored record.
    ///
    /// The new id is greater than every id handed out before, and
    /// `created_at == updated_at`.
    async fn insert(&self, req: CreateNoteRequest) -> Result<Note>;

    /// Fetch a note by ID. Fails with `NoteNotFound` if absent.
    async fn fetch(&self, id: i64) -> Result<Note>;

    /// List all notes in insertion order.
    async fn list(&self) -> Result<Vec<Note>>;

    /// Replace title and text, restamping `updated_at`.
    async fn update(&self, id: i64, req: UpdateNoteRequest) -> Result<Note>;

    /// Permanently delete a note. Fails with `NoteNotFound` if absent.
    async fn delete(&self, id: i64) -> Result<()>;

    /// Check if a note exists.
    async fn exists(&self, id: i64) -> Result<bool>;

    /// Verify the backing store is reachable.
    async fn ping(&self) -> Result<()>;
}
