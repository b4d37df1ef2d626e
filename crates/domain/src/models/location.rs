//! Location report domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::GeoPoint;

/// A place where an observer reported their coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationReport {
    pub id: Uuid,
    pub observer_id: Uuid,
    pub location: GeoPoint,
    pub created_at: DateTime<Utc>,
}

/// Request payload for reporting an observer's position.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocationReportRequest {
    /// Email of the reporting observer.
    #[validate(email(message = "Must be a valid email address"))]
    pub observer: String,

    #[validate(custom(function = "shared::validation::validate_latitude"))]
    pub latitude: f64,

    #[validate(custom(function = "shared::validation::validate_longitude"))]
    pub longitude: f64,
}

/// Response payload for location reports. Carries the national id of a
/// station near the reported point when one is within the configured radius.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocationReportResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station_near: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_location_report_request_deserialization() {
        let json = r#"{
            "observer": "ana@example.com",
            "latitude": 19.432608,
            "longitude": -99.133209
        }"#;
        let request: CreateLocationReportRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.observer, "ana@example.com");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_location_report_request_rejects_bad_coordinates() {
        let request = CreateLocationReportRequest {
            observer: "ana@example.com".to_string(),
            latitude: -91.0,
            longitude: 0.0,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_response_omits_station_near_when_absent() {
        let response = CreateLocationReportResponse { station_near: None };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_response_carries_station_near_when_found() {
        let response = CreateLocationReportResponse {
            station_near: Some("MX-04217".to_string()),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"stationNear\":\"MX-04217\""));
    }
}
