//! District repository for database operations.

use domain::error::{CreationError, LookupError};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::DistrictEntity;
use crate::metrics::QueryTimer;
use crate::repositories::creation_error;

/// Repository for district-related database operations.
#[derive(Clone)]
pub struct DistrictRepository {
    pool: PgPool,
}

impl DistrictRepository {
    /// Creates a new DistrictRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// True iff exactly one district record matches the national id.
    pub async fn exists(&self, national_id: &str) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("district_exists");
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM districts WHERE national_id = $1
            "#,
        )
        .bind(national_id)
        .fetch_one(&self.pool)
        .await?;
        timer.record();
        Ok(count.0 == 1)
    }

    /// Register a new district, atomically rejected on a duplicate
    /// national id.
    pub async fn create(
        &self,
        national_id: &str,
        name: &str,
    ) -> Result<DistrictEntity, CreationError> {
        let timer = QueryTimer::new("create_district");
        let result = sqlx::query_as::<_, DistrictEntity>(
            r#"
            INSERT INTO districts (national_id, name)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(national_id)
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| creation_error("district", national_id, e));
        timer.record();
        result
    }

    /// Fetch the unique district for a national id, failing loudly on
    /// zero or multiple matches.
    pub async fn get_by_national_id(&self, national_id: &str) -> Result<DistrictEntity, LookupError> {
        let timer = QueryTimer::new("get_district_by_national_id");
        let mut rows = sqlx::query_as::<_, DistrictEntity>(
            r#"
            SELECT * FROM districts WHERE national_id = $1 LIMIT 2
            "#,
        )
        .bind(national_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| LookupError::storage("district", e))?;
        timer.record();

        match rows.len() {
            1 => Ok(rows.remove(0)),
            0 => Err(LookupError::not_found("district", national_id)),
            _ => Err(LookupError::ambiguous("district", national_id)),
        }
    }

    /// Find a district by surrogate key, for resolving references on read.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<DistrictEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_district_by_id");
        let result = sqlx::query_as::<_, DistrictEntity>(
            r#"
            SELECT * FROM districts WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }
}
