//! Observer domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A registered platform user who submits observations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observer {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub age: i32,
    pub account_type: AccountType,
    /// Installation identifier used by the push-notification provider.
    pub installation_id: String,
    pub created_at: DateTime<Utc>,
}

/// Authentication provider used to validate the observer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AccountType {
    #[serde(rename = "Facebook")]
    Facebook,
    #[serde(rename = "G+")]
    GooglePlus,
}

/// Request payload for registering an observer.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateObserverRequest {
    #[validate(email(message = "Must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(custom(function = "shared::validation::validate_age"))]
    pub age: i32,

    pub account_type: AccountType,

    #[validate(length(min = 1, max = 200, message = "Installation id must be 1-200 characters"))]
    pub installation_id: String,
}

/// Response payload for observer lookups.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObserverResponse {
    pub email: String,
    pub name: String,
    pub age: i32,
    pub account_type: AccountType,
    pub installation_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<Observer> for ObserverResponse {
    fn from(o: Observer) -> Self {
        Self {
            email: o.email,
            name: o.name,
            age: o.age,
            account_type: o.account_type,
            installation_id: o.installation_id,
            created_at: o.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::SafeEmail;
    use fake::Fake;

    #[test]
    fn test_account_type_serialization() {
        assert_eq!(
            serde_json::to_string(&AccountType::Facebook).unwrap(),
            "\"Facebook\""
        );
        assert_eq!(
            serde_json::to_string(&AccountType::GooglePlus).unwrap(),
            "\"G+\""
        );
    }

    #[test]
    fn test_account_type_deserialization() {
        let fb: AccountType = serde_json::from_str("\"Facebook\"").unwrap();
        assert_eq!(fb, AccountType::Facebook);
        let gp: AccountType = serde_json::from_str("\"G+\"").unwrap();
        assert_eq!(gp, AccountType::GooglePlus);
        assert!(serde_json::from_str::<AccountType>("\"Twitter\"").is_err());
    }

    #[test]
    fn test_create_observer_request_deserialization() {
        let json = r#"{
            "email": "ana@example.com",
            "name": "Ana",
            "age": 29,
            "accountType": "G+",
            "installationId": "parse-abc123"
        }"#;
        let request: CreateObserverRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.email, "ana@example.com");
        assert_eq!(request.account_type, AccountType::GooglePlus);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_observer_request_rejects_bad_email() {
        let request = CreateObserverRequest {
            email: "not-an-email".to_string(),
            name: "Ana".to_string(),
            age: 29,
            account_type: AccountType::Facebook,
            installation_id: "parse-abc123".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_observer_request_rejects_implausible_age() {
        let request = CreateObserverRequest {
            email: SafeEmail().fake(),
            name: "Ana".to_string(),
            age: 140,
            account_type: AccountType::Facebook,
            installation_id: "parse-abc123".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_observer_response_serialization() {
        let response = ObserverResponse {
            email: "ana@example.com".to_string(),
            name: "Ana".to_string(),
            age: 29,
            account_type: AccountType::Facebook,
            installation_id: "parse-abc123".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"email\":\"ana@example.com\""));
        assert!(json.contains("\"accountType\":\"Facebook\""));
        assert!(json.contains("\"installationId\":\"parse-abc123\""));
    }
}
