//! Core data models for the notes service.
//!
//! A note has three shapes:
//! - [`Note`] is what the store holds and what the API returns.
//! - [`NoteInput`] is what clients send on create and update. It has no
//!   `id` or timestamp fields, so those cannot be set from the wire.
//! - [`CreateNoteRequest`] / [`UpdateNoteRequest`] are validated store inputs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// =============================================================================
// NOTE TYPES
// =============================================================================

/// A stored note.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, utoipa::ToSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// System-assigned identity, immutable after creation.
    pub id: i64,
    pub title: String,
    pub text: String,
    /// Set once at creation.
    pub created_at: DateTime<Utc>,
    /// Set at creation and restamped on every update.
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied note fields for create and update.
///
/// Both fields are optional at the wire level so that a missing field is a
/// validation failure rather than a deserialization failure. Unknown keys
/// (including `id`, `createdAt`, `updatedAt`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct NoteInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl NoteInput {
    /// Build an input with both fields set.
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            text: Some(text.into()),
        }
    }

    /// Validate into a create request.
    pub fn into_create(self) -> Result<CreateNoteRequest> {
        let (title, text) = self.into_required_fields()?;
        Ok(CreateNoteRequest { title, text })
    }

    /// Validate into an update request. Updates replace both fields.
    pub fn into_update(self) -> Result<UpdateNoteRequest> {
        let (title, text) = self.into_required_fields()?;
        Ok(UpdateNoteRequest { title, text })
    }

    fn into_required_fields(self) -> Result<(String, String)> {
        let title = required(self.title, "title")?;
        let text = required(self.text, "text")?;
        Ok((title, text))
    }
}

/// Reject absent, empty and whitespace-only values.
///
/// PostgreSQL `text` cannot hold U+0000, so NUL is refused here for every
/// store rather than surfacing later as a storage failure.
fn required(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(v) if v.contains('\0') => Err(Error::InvalidInput(format!(
            "{} must not contain NUL characters",
            field
        ))),
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::InvalidInput(format!("{} is required", field))),
    }
}

/// Request for creating a new note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateNoteRequest {
    pub title: String,
    pub text: String,
}

/// Request for replacing a note's title and text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateNoteRequest {
    pub title: String,
    pub text: String,
}
