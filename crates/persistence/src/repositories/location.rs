//! Location report repository for database operations.

use domain::error::CreationError;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::LocationReportEntity;
use crate::metrics::QueryTimer;
use crate::repositories::creation_error;

/// Repository for observer location reports.
#[derive(Clone)]
pub struct LocationReportRepository {
    pool: PgPool,
}

impl LocationReportRepository {
    /// Creates a new LocationReportRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append a location ping for an observer. Reports are an append-only
    /// trail; there is nothing to deduplicate.
    pub async fn create(
        &self,
        observer_id: Uuid,
        latitude: f64,
        longitude: f64,
    ) -> Result<LocationReportEntity, CreationError> {
        let timer = QueryTimer::new("create_location_report");
        let key = observer_id.to_string();
        let result = sqlx::query_as::<_, LocationReportEntity>(
            r#"
            INSERT INTO locations (observer_id, latitude, longitude)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(observer_id)
        .bind(latitude)
        .bind(longitude)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| creation_error("location report", &key, e));
        timer.record();
        result
    }
}
