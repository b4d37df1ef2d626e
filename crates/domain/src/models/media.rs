//! Media attachment domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Metadata for a media file attached to an observation. The file itself
/// lives in an external bucket; `name` is the app-created bucket key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: Uuid,
    pub observation_id: Uuid,
    pub media_type: MediaType,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Supported media kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Video,
    Photo,
    Audio,
}

/// Request payload for attaching media metadata to an observation.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMediaRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    /// Reference of the observation this media belongs to.
    pub observation: Uuid,

    pub media_type: MediaType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_serialization() {
        assert_eq!(serde_json::to_string(&MediaType::Video).unwrap(), "\"video\"");
        assert_eq!(serde_json::to_string(&MediaType::Photo).unwrap(), "\"photo\"");
        assert_eq!(serde_json::to_string(&MediaType::Audio).unwrap(), "\"audio\"");
    }

    #[test]
    fn test_create_media_request_deserialization() {
        let id = Uuid::new_v4();
        let json = format!(
            r#"{{"name": "obs-04217-001.jpg", "observation": "{id}", "mediaType": "photo"}}"#
        );
        let request: CreateMediaRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request.name, "obs-04217-001.jpg");
        assert_eq!(request.media_type, MediaType::Photo);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_media_request_rejects_unknown_type() {
        let id = Uuid::new_v4();
        let json =
            format!(r#"{{"name": "x.gif", "observation": "{id}", "mediaType": "gif"}}"#);
        assert!(serde_json::from_str::<CreateMediaRequest>(&json).is_err());
    }
}
