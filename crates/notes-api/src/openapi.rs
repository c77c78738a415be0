//! OpenAPI document served to Swagger UI.

use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::handlers;
use crate::handlers::system::HealthResponse;
use notes_core::{Note, NoteInput};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Notes API",
        version = "v1",
        description = "Create, read, update and delete notes"
    ),
    paths(
        handlers::notes::list_notes,
        handlers::notes::get_note,
        handlers::notes::create_note,
        handlers::notes::update_note,
        handlers::notes::delete_note,
        handlers::system::health,
    ),
    components(schemas(Note, NoteInput, ErrorBody, HealthResponse)),
    tags(
        (name = "Notes", description = "Note CRUD operations"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;
