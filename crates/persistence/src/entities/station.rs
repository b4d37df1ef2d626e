//! Station entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::GeoPoint;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the stations table.
#[derive(Debug, Clone, FromRow)]
pub struct StationEntity {
    pub id: Uuid,
    pub national_id: String,
    pub district_id: Uuid,
    pub observer_id: Option<Uuid>,
    pub name: String,
    pub address: String,
    pub picture_url: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
}

impl From<StationEntity> for domain::models::Station {
    fn from(entity: StationEntity) -> Self {
        Self {
            id: entity.id,
            national_id: entity.national_id,
            district_id: entity.district_id,
            observer_id: entity.observer_id,
            name: entity.name,
            address: entity.address,
            picture_url: entity.picture_url,
            location: GeoPoint::new(entity.latitude, entity.longitude),
            created_at: entity.created_at,
        }
    }
}
