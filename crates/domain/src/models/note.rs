//! Note attachment domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Metadata for a note file attached to an observation. Like media, the
/// content lives in an external bucket keyed by `name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub observation_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Request payload for attaching a note to an observation.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    /// Reference of the observation this note belongs to.
    pub observation: Uuid,
}
