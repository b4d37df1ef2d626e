//! Observation domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A record of an observer applying a classification, with filled checklist,
/// to a station.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub id: Uuid,
    pub station_id: Uuid,
    pub observer_id: Uuid,
    pub classification_id: Uuid,
    /// Filled-in copy of the classification's checklist template.
    pub filled_checklist: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// Request payload for recording an observation.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateObservationRequest {
    /// National id of the observed station.
    #[validate(length(min = 1, max = 50, message = "Station id must be 1-50 characters"))]
    pub station: String,

    /// Email of the authoring observer.
    #[validate(email(message = "Must be a valid email address"))]
    pub observer: String,

    /// Reference of the classification applied.
    pub classification: Uuid,

    pub filled_checklist: serde_json::Value,
}

/// Response payload for observation creation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateObservationResponse {
    /// Reference of the newly recorded observation.
    pub observation: Uuid,
}
