//! Media endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use persistence::repositories::{MediaRepository, ObservationRepository};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::media::CreateMediaRequest;

/// Attach media metadata to an observation.
///
/// POST /api/v1/media
pub async fn create_media(
    State(state): State<AppState>,
    Json(request): Json<CreateMediaRequest>,
) -> Result<StatusCode, ApiError> {
    request.validate()?;

    let repo = MediaRepository::new(state.pool.clone());

    // Friendly pre-check; the UNIQUE constraint is the real authority.
    if repo.exists(&request.name).await? {
        return Err(ApiError::Conflict(format!(
            "media already exists: {}",
            request.name
        )));
    }

    // The observation must already exist; media never dangles.
    ObservationRepository::new(state.pool.clone())
        .find_by_id(request.observation)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!("observation not found: {}", request.observation))
        })?;

    let entity = repo
        .create(request.observation, request.media_type.into(), &request.name)
        .await?;

    info!(
        media_id = %entity.id,
        observation_id = %entity.observation_id,
        name = %entity.name,
        "Media attached"
    );
    Ok(StatusCode::CREATED)
}
