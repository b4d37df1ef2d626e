//! Note repository for database operations.

use domain::error::CreationError;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::NoteEntity;
use crate::metrics::QueryTimer;
use crate::repositories::creation_error;

/// Repository for note-related database operations.
#[derive(Clone)]
pub struct NoteRepository {
    pool: PgPool,
}

impl NoteRepository {
    /// Creates a new NoteRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// True iff exactly one note record matches the name.
    pub async fn exists(&self, name: &str) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("note_exists");
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM notes WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        timer.record();
        Ok(count.0 == 1)
    }

    /// Attach a note reference to an observation, rejected atomically on
    /// a duplicate name.
    pub async fn create(
        &self,
        observation_id: Uuid,
        name: &str,
    ) -> Result<NoteEntity, CreationError> {
        let timer = QueryTimer::new("create_note");
        let result = sqlx::query_as::<_, NoteEntity>(
            r#"
            INSERT INTO notes (observation_id, name)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(observation_id)
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| creation_error("note", name, e));
        timer.record();
        result
    }
}
