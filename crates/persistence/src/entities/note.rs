//! Note entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the notes table.
#[derive(Debug, Clone, FromRow)]
pub struct NoteEntity {
    pub id: Uuid,
    pub observation_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<NoteEntity> for domain::models::Note {
    fn from(entity: NoteEntity) -> Self {
        Self {
            id: entity.id,
            observation_id: entity.observation_id,
            name: entity.name,
            created_at: entity.created_at,
        }
    }
}
