//! Location report entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::GeoPoint;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the locations table.
#[derive(Debug, Clone, FromRow)]
pub struct LocationReportEntity {
    pub id: Uuid,
    pub observer_id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
}

impl From<LocationReportEntity> for domain::models::LocationReport {
    fn from(entity: LocationReportEntity) -> Self {
        Self {
            id: entity.id,
            observer_id: entity.observer_id,
            location: GeoPoint::new(entity.latitude, entity.longitude),
            created_at: entity.created_at,
        }
    }
}
