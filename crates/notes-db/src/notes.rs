//! Note repository implementation.

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use notes_core::{
    temporal, CreateNoteRequest, Error, Note, NoteRepository, Result, UpdateNoteRequest,
};

const NOTE_COLUMNS: &str = "id, title, text, created_at, updated_at";

/// PostgreSQL implementation of NoteRepository.
///
/// Ids come from the `note.id` identity column, so they only ever grow.
#[derive(Clone)]
pub struct PgNoteRepository {
    pool: Pool<Postgres>,
}

impl PgNoteRepository {
    /// Create a new PgNoteRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn insert(&self, req: CreateNoteRequest) -> Result<Note> {
        let now = temporal::now_utc();
        let note = sqlx::query_as::<_, Note>(&format!(
            "INSERT INTO note (title, text, created_at, updated_at)
             VALUES ($1, $2, $3, $3)
             RETURNING {NOTE_COLUMNS}"
        ))
        .bind(&req.title)
        .bind(&req.text)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::Database)?;
        Ok(note)
    }

    async fn fetch(&self, id: i64) -> Result<Note> {
        sqlx::query_as::<_, Note>(&format!("SELECT {NOTE_COLUMNS} FROM note WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::Database)?
            .ok_or(Error::NoteNotFound(id))
    }

    async fn list(&self) -> Result<Vec<Note>> {
        let notes =
            sqlx::query_as::<_, Note>(&format!("SELECT {NOTE_COLUMNS} FROM note ORDER BY id ASC"))
                .fetch_all(&self.pool)
                .await
                .map_err(Error::Database)?;
        Ok(notes)
    }

    async fn update(&self, id: i64, req: UpdateNoteRequest) -> Result<Note> {
        // GREATEST keeps updated_at strictly increasing (see temporal::next_updated_at)
        let now = temporal::now_utc();
        sqlx::query_as::<_, Note>(&format!(
            "UPDATE note
             SET title = $1,
                 text = $2,
                 updated_at = GREATEST($3, updated_at + INTERVAL '1 microsecond')
             WHERE id = $4
             RETURNING {NOTE_COLUMNS}"
        ))
        .bind(&req.title)
        .bind(&req.text)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?
        .ok_or(Error::NoteNotFound(id))
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM note WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::NoteNotFound(id));
        }
        Ok(())
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM note WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(exists)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(())
    }
}
