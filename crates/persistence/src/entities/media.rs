//! Media entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::media::MediaType;
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum for media_type that maps to the PostgreSQL enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "media_type", rename_all = "lowercase")]
pub enum MediaTypeDb {
    Video,
    Photo,
    Audio,
}

impl From<MediaTypeDb> for MediaType {
    fn from(db: MediaTypeDb) -> Self {
        match db {
            MediaTypeDb::Video => MediaType::Video,
            MediaTypeDb::Photo => MediaType::Photo,
            MediaTypeDb::Audio => MediaType::Audio,
        }
    }
}

impl From<MediaType> for MediaTypeDb {
    fn from(t: MediaType) -> Self {
        match t {
            MediaType::Video => MediaTypeDb::Video,
            MediaType::Photo => MediaTypeDb::Photo,
            MediaType::Audio => MediaTypeDb::Audio,
        }
    }
}

/// Database row mapping for the media table.
#[derive(Debug, Clone, FromRow)]
pub struct MediaEntity {
    pub id: Uuid,
    pub observation_id: Uuid,
    pub media_type: MediaTypeDb,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<MediaEntity> for domain::models::Media {
    fn from(entity: MediaEntity) -> Self {
        Self {
            id: entity.id,
            observation_id: entity.observation_id,
            media_type: entity.media_type.into(),
            name: entity.name,
            created_at: entity.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_db_round_trip() {
        for t in [MediaType::Video, MediaType::Photo, MediaType::Audio] {
            let db: MediaTypeDb = t.into();
            let back: MediaType = db.into();
            assert_eq!(back, t);
        }
    }
}
