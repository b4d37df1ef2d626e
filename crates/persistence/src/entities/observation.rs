//! Observation entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::services::ObservedClassification;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the observations table.
#[derive(Debug, Clone, FromRow)]
pub struct ObservationEntity {
    pub id: Uuid,
    pub station_id: Uuid,
    pub observer_id: Uuid,
    pub classification_id: Uuid,
    pub filled_checklist: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl From<ObservationEntity> for domain::models::Observation {
    fn from(entity: ObservationEntity) -> Self {
        Self {
            id: entity.id,
            station_id: entity.station_id,
            observer_id: entity.observer_id,
            classification_id: entity.classification_id,
            filled_checklist: entity.filled_checklist,
            created_at: entity.created_at,
        }
    }
}

/// Join row pairing an observed classification with its repeatable flag.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct ObservedClassificationRow {
    pub classification_id: Uuid,
    pub repeatable: bool,
}

impl From<ObservedClassificationRow> for ObservedClassification {
    fn from(row: ObservedClassificationRow) -> Self {
        Self {
            classification_id: row.classification_id,
            repeatable: row.repeatable,
        }
    }
}
