use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::error::{CreationError, IndexSearchError, LookupError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "validation_error", msg.clone()),
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".into(),
                )
            }
            ApiError::ServiceUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "service_unavailable",
                msg.clone(),
            ),
        };

        let body = ErrorBody {
            error: error_code.into(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<CreationError> for ApiError {
    fn from(err: CreationError) -> Self {
        match &err {
            CreationError::Duplicate { .. } => ApiError::Conflict(err.to_string()),
            CreationError::MissingReference { .. } => ApiError::NotFound(err.to_string()),
            CreationError::Unindexed { .. } => ApiError::ServiceUnavailable(err.to_string()),
            CreationError::Storage { .. } => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        match &err {
            LookupError::NotFound { .. } | LookupError::Unresolvable { .. } => {
                ApiError::NotFound(err.to_string())
            }
            // A broken uniqueness invariant is a data fault, not a caller error
            LookupError::Ambiguous { .. } | LookupError::Storage { .. } => {
                ApiError::Internal(err.to_string())
            }
            LookupError::Empty { .. } => ApiError::NotFound(err.to_string()),
        }
    }
}

impl From<IndexSearchError> for ApiError {
    fn from(err: IndexSearchError) -> Self {
        ApiError::ServiceUnavailable(err.to_string())
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Resource not found".into()),
            sqlx::Error::Database(db_err) => {
                if let Some(code) = db_err.code() {
                    match code.as_ref() {
                        "23505" => ApiError::Conflict("Resource already exists".into()),
                        "23503" => ApiError::NotFound("Referenced resource not found".into()),
                        _ => ApiError::Internal(format!("Database error: {}", db_err)),
                    }
                } else {
                    ApiError::Internal(format!("Database error: {}", db_err))
                }
            }
            _ => ApiError::Internal(format!("Database error: {}", err)),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message.clone().map(|m| m.to_string()).unwrap_or_default()
                    )
                })
            })
            .collect();

        ApiError::Validation(messages.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_api_error_not_found() {
        let error = ApiError::NotFound("resource not found".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_api_error_conflict() {
        let error = ApiError::Conflict("already exists".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_api_error_validation() {
        let error = ApiError::Validation("invalid input".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_api_error_internal() {
        let error = ApiError::Internal("database connection failed".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_api_error_service_unavailable() {
        let error = ApiError::ServiceUnavailable("maintenance".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_duplicate_maps_to_conflict() {
        let error: ApiError = CreationError::duplicate("observer", "ana@example.com").into();
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_missing_reference_maps_to_not_found() {
        let error: ApiError =
            CreationError::missing_reference("station", "district", "MX-09-123").into();
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_lookup_not_found_keeps_entity_identity() {
        let error: ApiError = LookupError::not_found("district", "MX-09").into();
        match &error {
            ApiError::NotFound(msg) => assert!(msg.contains("district")),
            _ => panic!("Expected NotFound error"),
        }
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_ambiguous_maps_to_internal() {
        let error: ApiError = LookupError::ambiguous("observer", "ana@example.com").into();
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_empty_catalog_maps_to_not_found() {
        let error: ApiError = LookupError::Empty {
            entity: "classification",
        }
        .into();
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_index_search_maps_to_service_unavailable() {
        let error: ApiError = IndexSearchError::Unavailable(sqlx::Error::PoolClosed).into();
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_from_sqlx_row_not_found() {
        let error: ApiError = sqlx::Error::RowNotFound.into();
        match error {
            ApiError::NotFound(msg) => assert_eq!(msg, "Resource not found"),
            _ => panic!("Expected NotFound error"),
        }
    }

    #[test]
    fn test_api_error_display() {
        assert_eq!(
            format!("{}", ApiError::NotFound("test".to_string())),
            "Not found: test"
        );
        assert_eq!(
            format!("{}", ApiError::Conflict("test".to_string())),
            "Conflict: test"
        );
        assert_eq!(
            format!("{}", ApiError::Validation("test".to_string())),
            "Validation error: test"
        );
    }
}
