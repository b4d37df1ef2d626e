//! Geospatial index entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::GeoPoint;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the station_geo_index table, the denormalized
/// (station id, point) projection used for radius search.
#[derive(Debug, Clone, FromRow)]
pub struct StationGeoEntity {
    pub station_id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub indexed_at: DateTime<Utc>,
}

impl StationGeoEntity {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}
