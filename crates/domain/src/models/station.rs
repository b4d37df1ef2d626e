//! Station (casilla) domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::GeoPoint;

/// Sentinel rendered in place of the observer email while a station is
/// unassigned.
pub const UNASSIGNED_OBSERVER: &str = "unassigned";

/// A physical polling location. Belongs to one district and is optionally
/// assigned to one observer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: Uuid,
    pub national_id: String,
    pub district_id: Uuid,
    /// Set by a later assignment, never at creation.
    pub observer_id: Option<Uuid>,
    pub name: String,
    pub address: String,
    pub picture_url: String,
    pub location: GeoPoint,
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating a station.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStationRequest {
    #[validate(length(min = 1, max = 50, message = "National id must be 1-50 characters"))]
    pub national_id: String,

    /// National id of the district the station belongs to.
    #[validate(length(min = 1, max = 50, message = "District id must be 1-50 characters"))]
    pub district: String,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(custom(function = "shared::validation::validate_latitude"))]
    pub latitude: f64,

    #[validate(custom(function = "shared::validation::validate_longitude"))]
    pub longitude: f64,

    #[validate(length(min = 1, max = 300, message = "Address must be 1-300 characters"))]
    pub address: String,

    #[validate(url(message = "Picture url must be a valid URL"))]
    pub picture_url: String,
}

/// Request payload for assigning a station to an observer.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AssignStationRequest {
    #[validate(email(message = "Must be a valid email address"))]
    pub observer: String,
}

/// Response payload for station detail requests.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationDetailResponse {
    pub national_id: String,
    /// National id of the owning district.
    pub district: String,
    /// Observer email, or `"unassigned"` while no observer is attached.
    pub observer: String,
    pub name: String,
    pub address: String,
    pub picture_url: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
}

impl StationDetailResponse {
    /// Builds the response from a station plus the resolved references.
    pub fn from_station(
        station: Station,
        district_national_id: String,
        observer_email: Option<String>,
    ) -> Self {
        Self {
            national_id: station.national_id,
            district: district_national_id,
            observer: observer_email.unwrap_or_else(|| UNASSIGNED_OBSERVER.to_string()),
            name: station.name,
            address: station.address,
            picture_url: station.picture_url,
            latitude: station.location.latitude,
            longitude: station.location.longitude,
            created_at: station.created_at,
        }
    }
}

/// Response payload listing the stations assigned to an observer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObserverStationsResponse {
    /// National ids of the assigned stations.
    pub stations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_station() -> Station {
        Station {
            id: Uuid::new_v4(),
            national_id: "MX-04217".to_string(),
            district_id: Uuid::new_v4(),
            observer_id: None,
            name: "Escuela Primaria Benito Juarez".to_string(),
            address: "Av. Reforma 123, CDMX".to_string(),
            picture_url: "https://storage.example.com/casillas/04217.jpg".to_string(),
            location: GeoPoint::new(19.432608, -99.133209),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_create_station_request_deserialization() {
        let json = r#"{
            "nationalId": "MX-04217",
            "district": "DF-09",
            "name": "Escuela Primaria Benito Juarez",
            "latitude": 19.432608,
            "longitude": -99.133209,
            "address": "Av. Reforma 123, CDMX",
            "pictureUrl": "https://storage.example.com/casillas/04217.jpg"
        }"#;
        let request: CreateStationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.national_id, "MX-04217");
        assert_eq!(request.district, "DF-09");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_station_request_rejects_bad_coordinates() {
        let json = r#"{
            "nationalId": "MX-04217",
            "district": "DF-09",
            "name": "Escuela",
            "latitude": 95.0,
            "longitude": -99.1,
            "address": "Av. Reforma 123",
            "pictureUrl": "https://storage.example.com/x.jpg"
        }"#;
        let request: CreateStationRequest = serde_json::from_str(json).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_station_request_rejects_bad_picture_url() {
        let json = r#"{
            "nationalId": "MX-04217",
            "district": "DF-09",
            "name": "Escuela",
            "latitude": 19.4,
            "longitude": -99.1,
            "address": "Av. Reforma 123",
            "pictureUrl": "not a url"
        }"#;
        let request: CreateStationRequest = serde_json::from_str(json).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_detail_response_renders_unassigned_sentinel() {
        let response =
            StationDetailResponse::from_station(sample_station(), "DF-09".to_string(), None);
        assert_eq!(response.observer, "unassigned");
        assert_eq!(response.district, "DF-09");
    }

    #[test]
    fn test_detail_response_renders_observer_email() {
        let response = StationDetailResponse::from_station(
            sample_station(),
            "DF-09".to_string(),
            Some("ana@example.com".to_string()),
        );
        assert_eq!(response.observer, "ana@example.com");
    }

    #[test]
    fn test_detail_response_serialization() {
        let response =
            StationDetailResponse::from_station(sample_station(), "DF-09".to_string(), None);
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"nationalId\":\"MX-04217\""));
        assert!(json.contains("\"observer\":\"unassigned\""));
        assert!(json.contains("\"pictureUrl\""));
    }
}
