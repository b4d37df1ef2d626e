//! Media repository for database operations.

use domain::error::CreationError;
use sqlx::PgPool;

use crate::entities::{MediaEntity, MediaTypeDb};
use crate::metrics::QueryTimer;
use crate::repositories::creation_error;
use uuid::Uuid;

/// Repository for media-related database operations.
#[derive(Clone)]
pub struct MediaRepository {
    pool: PgPool,
}

impl MediaRepository {
    /// Creates a new MediaRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// True iff exactly one media record matches the name.
    pub async fn exists(&self, name: &str) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("media_exists");
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM media WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        timer.record();
        Ok(count.0 == 1)
    }

    /// Attach a media reference to an observation. Names are globally
    /// unique; a collision is a duplicate, not a silent overwrite.
    pub async fn create(
        &self,
        observation_id: Uuid,
        media_type: MediaTypeDb,
        name: &str,
    ) -> Result<MediaEntity, CreationError> {
        let timer = QueryTimer::new("create_media");
        let result = sqlx::query_as::<_, MediaEntity>(
            r#"
            INSERT INTO media (observation_id, media_type, name)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(observation_id)
        .bind(media_type)
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| creation_error("media", name, e));
        timer.record();
        result
    }
}
