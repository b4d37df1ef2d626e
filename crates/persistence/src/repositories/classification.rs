//! Classification repository for database operations.

use domain::error::{CreationError, LookupError};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::ClassificationEntity;
use crate::metrics::QueryTimer;
use crate::repositories::creation_error;

/// Repository for classification-related database operations.
#[derive(Clone)]
pub struct ClassificationRepository {
    pool: PgPool,
}

impl ClassificationRepository {
    /// Creates a new ClassificationRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a new classification template with its checklist and
    /// repeatability flag.
    pub async fn create(
        &self,
        name: &str,
        checklist: &serde_json::Value,
        repeatable: bool,
    ) -> Result<ClassificationEntity, CreationError> {
        let timer = QueryTimer::new("create_classification");
        let result = sqlx::query_as::<_, ClassificationEntity>(
            r#"
            INSERT INTO classifications (name, checklist, repeatable)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(checklist)
        .bind(repeatable)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| creation_error("classification", name, e));
        timer.record();
        result
    }

    /// All classification ids, in creation order. Fails when the catalog
    /// is empty: an election with nothing to classify is a setup error.
    pub async fn list_ids(&self) -> Result<Vec<Uuid>, LookupError> {
        let timer = QueryTimer::new("list_classification_ids");
        let ids: Vec<Uuid> = sqlx::query_scalar(
            r#"
            SELECT id FROM classifications ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| LookupError::storage("classification", e))?;
        timer.record();

        if ids.is_empty() {
            return Err(LookupError::Empty {
                entity: "classification",
            });
        }
        Ok(ids)
    }

    /// Find a classification by id, for resolving references on read.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ClassificationEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_classification_by_id");
        let result = sqlx::query_as::<_, ClassificationEntity>(
            r#"
            SELECT * FROM classifications WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }
}
