//! Classification endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use persistence::repositories::ClassificationRepository;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::services::AvailabilityEngine;
use domain::models::classification::{
    ClassificationDetailResponse, ClassificationListResponse, CreateClassificationRequest,
};

/// Response payload for classification creation.
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassificationResponse {
    pub classification: Uuid,
}

/// Create a classification template.
///
/// POST /api/v1/classifications
pub async fn create_classification(
    State(state): State<AppState>,
    Json(request): Json<CreateClassificationRequest>,
) -> Result<(StatusCode, Json<CreateClassificationResponse>), ApiError> {
    request.validate()?;

    let repo = ClassificationRepository::new(state.pool.clone());
    let entity = repo
        .create(&request.name, &request.checklist, request.repeatable)
        .await?;

    info!(
        classification_id = %entity.id,
        name = %entity.name,
        repeatable = entity.repeatable,
        "Classification created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateClassificationResponse {
            classification: entity.id,
        }),
    ))
}

/// List every classification reference in the catalog.
///
/// GET /api/v1/classifications
pub async fn list_classifications(
    State(state): State<AppState>,
) -> Result<Json<ClassificationListResponse>, ApiError> {
    let engine = AvailabilityEngine::new(state.pool.clone());
    let classifications = engine.all_classifications().await?;

    Ok(Json(ClassificationListResponse { classifications }))
}

/// Classification detail.
///
/// GET /api/v1/classifications/:id
pub async fn get_classification(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClassificationDetailResponse>, ApiError> {
    let engine = AvailabilityEngine::new(state.pool.clone());
    let classification = engine.detail(id).await?;

    Ok(Json(classification.into()))
}
