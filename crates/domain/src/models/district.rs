//! District domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// An administrative grouping of stations, keyed by its identifier in the
/// national database.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct District {
    pub id: Uuid,
    pub national_id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating a district.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDistrictRequest {
    #[validate(length(min = 1, max = 50, message = "National id must be 1-50 characters"))]
    pub national_id: String,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
}

/// Response payload for district creation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictResponse {
    pub national_id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<District> for DistrictResponse {
    fn from(d: District) -> Self {
        Self {
            national_id: d.national_id,
            name: d.name,
            created_at: d.created_at,
        }
    }
}
