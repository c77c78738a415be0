//! Note CRUD handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use notes_core::NoteInput;

use crate::error::ApiError;
use crate::AppState;

/// Path of a single note resource.
pub fn note_location(id: i64) -> String {
    format!("/notes/{}", id)
}

/// Ids are positive integers; anything else addresses no note.
fn parse_note_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::NotFound(format!("Note {} not found", raw)))
}

#[utoipa::path(
    get,
    path = "/notes",
    tag = "Notes",
    responses(
        (status = 200, description = "All notes in insertion order", body = [notes_core::Note]),
        (status = 500, description = "Storage failure", body = crate::error::ErrorBody)
    )
)]
pub async fn list_notes(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let notes = state.notes.list_notes().await?;
    Ok(Json(notes))
}

#[utoipa::path(
    get,
    path = "/notes/{id}",
    tag = "Notes",
    params(("id" = i64, Path, description = "Note id")),
    responses(
        (status = 200, description = "The note", body = notes_core::Note),
        (status = 404, description = "No note with this id", body = crate::error::ErrorBody)
    )
)]
pub async fn get_note(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(raw_id) = path?;
    let id = parse_note_id(&raw_id)?;
    let note = state.notes.get_note(id).await?;
    Ok(Json(note))
}

#[utoipa::path(
    post,
    path = "/notes",
    tag = "Notes",
    request_body = NoteInput,
    responses(
        (status = 201, description = "Note created", body = notes_core::Note,
            headers(("Location" = String, description = "Path of the new note"))),
        (status = 400, description = "Missing title or text, or malformed JSON", body = crate::error::ErrorBody)
    )
)]
pub async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<NoteInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(input) = payload?;
    let note = state.notes.create_note(input).await?;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, note_location(note.id))],
        Json(note),
    ))
}

#[utoipa::path(
    put,
    path = "/notes/{id}",
    tag = "Notes",
    params(("id" = i64, Path, description = "Note id")),
    request_body = NoteInput,
    responses(
        (status = 204, description = "Note updated"),
        (status = 400, description = "Missing title or text, or malformed JSON", body = crate::error::ErrorBody),
        (status = 404, description = "No note with this id", body = crate::error::ErrorBody)
    )
)]
pub async fn update_note(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<NoteInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(raw_id) = path?;
    let id = parse_note_id(&raw_id)?;
    let Json(input) = payload?;
    state.notes.update_note(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/notes/{id}",
    tag = "Notes",
    params(("id" = i64, Path, description = "Note id")),
    responses(
        (status = 204, description = "Note deleted"),
        (status = 404, description = "No note with this id", body = crate::error::ErrorBody)
    )
)]
pub async fn delete_note(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(raw_id) = path?;
    let id = parse_note_id(&raw_id)?;
    state.notes.delete_note(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
