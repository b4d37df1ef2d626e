//! Station repository for database operations.

use domain::error::{CreationError, LookupError};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::StationEntity;
use crate::metrics::QueryTimer;
use crate::repositories::creation_error;

/// Input for creating a new station record.
#[derive(Debug, Clone)]
pub struct CreateStationInput {
    pub national_id: String,
    pub district_id: Uuid,
    pub name: String,
    pub address: String,
    pub picture_url: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Repository for station-related database operations.
#[derive(Clone)]
pub struct StationRepository {
    pool: PgPool,
}

impl StationRepository {
    /// Creates a new StationRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// True iff exactly one station record matches the national id.
    pub async fn exists(&self, national_id: &str) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("station_exists");
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM stations WHERE national_id = $1
            "#,
        )
        .bind(national_id)
        .fetch_one(&self.pool)
        .await?;
        timer.record();
        Ok(count.0 == 1)
    }

    /// Persist a new station. Stations start life unassigned; assignment
    /// is a separate operation.
    pub async fn create(&self, input: CreateStationInput) -> Result<StationEntity, CreationError> {
        let timer = QueryTimer::new("create_station");
        let result = sqlx::query_as::<_, StationEntity>(
            r#"
            INSERT INTO stations (national_id, district_id, name, address, picture_url, latitude, longitude)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&input.national_id)
        .bind(input.district_id)
        .bind(&input.name)
        .bind(&input.address)
        .bind(&input.picture_url)
        .bind(input.latitude)
        .bind(input.longitude)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| creation_error("station", &input.national_id, e));
        timer.record();
        result
    }

    /// Fetch the unique station for a national id, failing loudly on
    /// zero or multiple matches.
    pub async fn get_by_national_id(&self, national_id: &str) -> Result<StationEntity, LookupError> {
        let timer = QueryTimer::new("get_station_by_national_id");
        let mut rows = sqlx::query_as::<_, StationEntity>(
            r#"
            SELECT * FROM stations WHERE national_id = $1 LIMIT 2
            "#,
        )
        .bind(national_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| LookupError::storage("station", e))?;
        timer.record();

        match rows.len() {
            1 => Ok(rows.remove(0)),
            0 => Err(LookupError::not_found("station", national_id)),
            _ => Err(LookupError::ambiguous("station", national_id)),
        }
    }

    /// Find a station by surrogate key, for resolving references on read.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<StationEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_station_by_id");
        let result = sqlx::query_as::<_, StationEntity>(
            r#"
            SELECT * FROM stations WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// All stations currently assigned to an observer.
    pub async fn find_by_observer_id(
        &self,
        observer_id: Uuid,
    ) -> Result<Vec<StationEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_stations_by_observer");
        let result = sqlx::query_as::<_, StationEntity>(
            r#"
            SELECT * FROM stations WHERE observer_id = $1 ORDER BY national_id
            "#,
        )
        .bind(observer_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Point the station at an observer. Reassignment overwrites the
    /// previous observer without complaint.
    pub async fn assign_observer(
        &self,
        station_id: Uuid,
        observer_id: Uuid,
    ) -> Result<Option<StationEntity>, sqlx::Error> {
        let timer = QueryTimer::new("assign_station_observer");
        let result = sqlx::query_as::<_, StationEntity>(
            r#"
            UPDATE stations
            SET observer_id = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(station_id)
        .bind(observer_id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }
}
