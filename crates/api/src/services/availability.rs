//! Classification availability: which templates a station can still take.
//!
//! A non-repeatable classification that has been observed at a station is
//! exhausted for that station. Filtering is by classification identity, so
//! availability survives catalog growth and reordering.

use domain::models::Classification;
use domain::services::{filter_available, ObservedClassification};
use persistence::repositories::{
    ClassificationRepository, ObservationRepository, StationRepository,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ApiError;

/// Availability queries over the classification catalog.
#[derive(Clone)]
pub struct AvailabilityEngine {
    classifications: ClassificationRepository,
    observations: ObservationRepository,
    stations: StationRepository,
}

impl AvailabilityEngine {
    pub fn new(pool: PgPool) -> Self {
        Self {
            classifications: ClassificationRepository::new(pool.clone()),
            observations: ObservationRepository::new(pool.clone()),
            stations: StationRepository::new(pool),
        }
    }

    /// The full catalog, in creation order. An empty catalog is an error,
    /// never an empty-ok answer.
    pub async fn all_classifications(&self) -> Result<Vec<Uuid>, ApiError> {
        Ok(self.classifications.list_ids().await?)
    }

    /// Classifications still applicable at a station: the catalog minus
    /// the non-repeatable ones already observed there. A fully exhausted
    /// station fails the lookup rather than answering with an empty list.
    pub async fn available_for(&self, station_national_id: &str) -> Result<Vec<Uuid>, ApiError> {
        let station = self.stations.get_by_national_id(station_national_id).await?;
        let all = self.classifications.list_ids().await?;
        let observed: Vec<ObservedClassification> = self
            .observations
            .classifications_observed_at(station.id)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(filter_available(&all, &observed)?)
    }

    /// Detail for a single classification.
    pub async fn detail(&self, id: Uuid) -> Result<Classification, ApiError> {
        self.classifications
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApiError::NotFound(format!("classification not found: {id}")))
    }
}
