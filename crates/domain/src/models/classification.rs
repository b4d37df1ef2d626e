//! Classification domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A reusable checklist template. `repeatable` controls whether it can be
/// applied more than once to the same station.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub id: Uuid,
    pub name: String,
    /// Checklist template; schema is defined by the client, stored verbatim.
    pub checklist: serde_json::Value,
    pub repeatable: bool,
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating a classification.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassificationRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    pub checklist: serde_json::Value,

    pub repeatable: bool,
}

/// Response payload for classification detail requests.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationDetailResponse {
    pub name: String,
    pub checklist: serde_json::Value,
    pub repeatable: bool,
}

impl From<Classification> for ClassificationDetailResponse {
    fn from(c: Classification) -> Self {
        Self {
            name: c.name,
            checklist: c.checklist,
            repeatable: c.repeatable,
        }
    }
}

/// Response payload carrying a list of classification references.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationListResponse {
    pub classifications: Vec<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_classification_request_deserialization() {
        let json = r#"{
            "name": "Apertura de casilla",
            "checklist": {"items": ["urna sellada", "boletas contadas"]},
            "repeatable": false
        }"#;
        let request: CreateClassificationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name, "Apertura de casilla");
        assert!(!request.repeatable);
        assert_eq!(request.checklist["items"][0], "urna sellada");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_checklist_schema_is_arbitrary() {
        // The template schema is opaque to the backend; any JSON shape is kept.
        let request = CreateClassificationRequest {
            name: "Incidente".to_string(),
            checklist: json!([1, {"nested": true}, "free-form"]),
            repeatable: true,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_detail_response_serialization() {
        let response = ClassificationDetailResponse {
            name: "Cierre".to_string(),
            checklist: json!({"items": []}),
            repeatable: false,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"name\":\"Cierre\""));
        assert!(json.contains("\"repeatable\":false"));
    }

    #[test]
    fn test_list_response_serialization() {
        let id = Uuid::new_v4();
        let response = ClassificationListResponse {
            classifications: vec![id],
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(&id.to_string()));
    }
}
