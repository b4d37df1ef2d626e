//! Classification entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the classifications table.
#[derive(Debug, Clone, FromRow)]
pub struct ClassificationEntity {
    pub id: Uuid,
    pub name: String,
    pub checklist: serde_json::Value,
    pub repeatable: bool,
    pub created_at: DateTime<Utc>,
}

impl From<ClassificationEntity> for domain::models::Classification {
    fn from(entity: ClassificationEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            checklist: entity.checklist,
            repeatable: entity.repeatable,
            created_at: entity.created_at,
        }
    }
}
