//! Station directory: creation, lookup, assignment and proximity search.
//!
//! Station creation is two-step: the row is persisted first, then the
//! geospatial index is written. When the index write fails the station is
//! durable but unsearchable by proximity, and the call reports exactly
//! that; there is no two-phase commit and no rollback of the row.

use async_trait::async_trait;
use domain::error::{CreationError, LookupError};
use domain::models::station::{CreateStationRequest, StationDetailResponse};
use domain::models::{GeoPoint, Station};
use domain::services::{first_resolvable, StationResolver};
use persistence::repositories::{
    CreateStationInput, DistrictRepository, GeoIndexRepository, ObserverRepository,
    StationRepository,
};
use sqlx::PgPool;
use tracing::{error, info};

use crate::error::ApiError;
use crate::middleware::metrics;

/// Directory over the stations table and its geospatial projection.
#[derive(Clone)]
pub struct StationDirectory {
    stations: StationRepository,
    districts: DistrictRepository,
    observers: ObserverRepository,
    geo_index: GeoIndexRepository,
}

impl StationDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self {
            stations: StationRepository::new(pool.clone()),
            districts: DistrictRepository::new(pool.clone()),
            observers: ObserverRepository::new(pool.clone()),
            geo_index: GeoIndexRepository::new(pool),
        }
    }

    /// Create a station inside an existing district and index its
    /// location.
    pub async fn create_station(&self, request: CreateStationRequest) -> Result<Station, ApiError> {
        // Friendly pre-check; the UNIQUE constraint is the real authority.
        if self.stations.exists(&request.national_id).await? {
            return Err(ApiError::Conflict(format!(
                "station already exists: {}",
                request.national_id
            )));
        }

        let district = self.districts.get_by_national_id(&request.district).await?;

        let entity = self
            .stations
            .create(CreateStationInput {
                national_id: request.national_id,
                district_id: district.id,
                name: request.name,
                address: request.address,
                picture_url: request.picture_url,
                latitude: request.latitude,
                longitude: request.longitude,
            })
            .await?;
        let station: Station = entity.into();

        if let Err(index_err) = self.geo_index.index(station.id, station.location).await {
            error!(
                station_id = %station.id,
                national_id = %station.national_id,
                error = %index_err,
                "Station stored but not indexed for proximity search"
            );
            metrics::record_station_unindexed();
            return Err(CreationError::Unindexed {
                entity: "station",
                source: index_err,
            }
            .into());
        }

        metrics::record_station_registered();
        info!(
            station_id = %station.id,
            national_id = %station.national_id,
            "Station registered"
        );
        Ok(station)
    }

    /// Station detail with its district and observer references resolved
    /// to their natural keys.
    pub async fn station_detail(&self, national_id: &str) -> Result<StationDetailResponse, ApiError> {
        let entity = self.stations.get_by_national_id(national_id).await?;

        // The FK guarantees the district row; a miss here is data corruption.
        let district = self
            .districts
            .find_by_id(entity.district_id)
            .await?
            .ok_or_else(|| {
                ApiError::Internal(format!(
                    "station {} references a missing district",
                    entity.national_id
                ))
            })?;

        let observer_email = match entity.observer_id {
            Some(observer_id) => self
                .observers
                .find_by_id(observer_id)
                .await?
                .map(|o| o.email),
            None => None,
        };

        Ok(StationDetailResponse::from_station(
            entity.into(),
            district.national_id,
            observer_email,
        ))
    }

    /// Assign a station to an observer by their natural keys. Reassignment
    /// silently replaces the previous observer.
    pub async fn assign(&self, national_id: &str, observer_email: &str) -> Result<Station, ApiError> {
        let station = self.stations.get_by_national_id(national_id).await?;
        let observer = self.observers.get_by_email(observer_email).await?;

        let updated = self
            .stations
            .assign_observer(station.id, observer.id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("station not found: {national_id}")))?;

        info!(
            station_id = %updated.id,
            observer_id = %observer.id,
            "Station assigned to observer"
        );
        Ok(updated.into())
    }

    /// National ids of the stations assigned to an observer. The observer
    /// must exist and hold at least one assignment; an observer with no
    /// stations fails the lookup rather than answering with an empty list.
    pub async fn stations_for_observer(&self, email: &str) -> Result<Vec<String>, ApiError> {
        let observer = self.observers.get_by_email(email).await?;
        let stations = self.stations.find_by_observer_id(observer.id).await?;
        let national_ids = stations.into_iter().map(|s| s.national_id).collect();
        require_assignments(national_ids).map_err(|e| {
            info!(email = %email, "Observer has no assigned stations");
            e.into()
        })
    }

    /// First indexed station within the radius that still resolves against
    /// the stations table. Index order decides; distance does not rank.
    pub async fn nearest_station(
        &self,
        center: GeoPoint,
        radius_meters: f64,
    ) -> Result<Station, ApiError> {
        let candidates = self.geo_index.search_within(center, radius_meters).await?;
        let station = first_resolvable(&candidates, self).await?;
        Ok(station)
    }
}

/// An assignment listing must carry at least one station.
fn require_assignments(national_ids: Vec<String>) -> Result<Vec<String>, LookupError> {
    if national_ids.is_empty() {
        return Err(LookupError::Empty { entity: "station" });
    }
    Ok(national_ids)
}

#[async_trait]
impl StationResolver for StationDirectory {
    async fn resolve(&self, station_id: uuid::Uuid) -> Result<Station, LookupError> {
        self.stations
            .find_by_id(station_id)
            .await
            .map_err(|e| LookupError::storage("station", e))?
            .map(Into::into)
            .ok_or_else(|| LookupError::not_found("station", station_id.to_string()))
    }
}
