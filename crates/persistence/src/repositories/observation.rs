//! Observation repository for database operations.

use domain::error::CreationError;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{ObservationEntity, ObservedClassificationRow};
use crate::metrics::QueryTimer;
use crate::repositories::creation_error;

/// Input for recording a new observation.
#[derive(Debug, Clone)]
pub struct CreateObservationInput {
    pub station_id: Uuid,
    pub observer_id: Uuid,
    pub classification_id: Uuid,
    pub filled_checklist: serde_json::Value,
}

/// Repository for observation-related database operations.
#[derive(Clone)]
pub struct ObservationRepository {
    pool: PgPool,
}

impl ObservationRepository {
    /// Creates a new ObservationRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record an observation against a station. The classification
    /// reference is enforced by the foreign key; a stale id surfaces as
    /// a missing reference, not a stored dangle.
    pub async fn create(
        &self,
        input: CreateObservationInput,
    ) -> Result<ObservationEntity, CreationError> {
        let timer = QueryTimer::new("create_observation");
        let key = input.classification_id.to_string();
        let result = sqlx::query_as::<_, ObservationEntity>(
            r#"
            INSERT INTO observations (station_id, observer_id, classification_id, filled_checklist)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(input.station_id)
        .bind(input.observer_id)
        .bind(input.classification_id)
        .bind(&input.filled_checklist)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| creation_error("observation", &key, e));
        timer.record();
        result
    }

    /// Find an observation by id, for attaching media and notes.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ObservationEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_observation_by_id");
        let result = sqlx::query_as::<_, ObservationEntity>(
            r#"
            SELECT * FROM observations WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// The classifications already observed at a station, with their
    /// repeatability flags. Duplicate rows for repeatable classifications
    /// are collapsed by the join.
    pub async fn classifications_observed_at(
        &self,
        station_id: Uuid,
    ) -> Result<Vec<ObservedClassificationRow>, sqlx::Error> {
        let timer = QueryTimer::new("classifications_observed_at_station");
        let result = sqlx::query_as::<_, ObservedClassificationRow>(
            r#"
            SELECT DISTINCT o.classification_id, c.repeatable
            FROM observations o
            JOIN classifications c ON c.id = o.classification_id
            WHERE o.station_id = $1
            "#,
        )
        .bind(station_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}
