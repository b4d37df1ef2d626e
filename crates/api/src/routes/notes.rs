//! Note endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use persistence::repositories::{NoteRepository, ObservationRepository};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::note::CreateNoteRequest;

/// Attach a note to an observation.
///
/// POST /api/v1/notes
pub async fn create_note(
    State(state): State<AppState>,
    Json(request): Json<CreateNoteRequest>,
) -> Result<StatusCode, ApiError> {
    request.validate()?;

    let repo = NoteRepository::new(state.pool.clone());

    // Friendly pre-check; the UNIQUE constraint is the real authority.
    if repo.exists(&request.name).await? {
        return Err(ApiError::Conflict(format!(
            "note already exists: {}",
            request.name
        )));
    }

    // The observation must already exist; notes never dangle.
    ObservationRepository::new(state.pool.clone())
        .find_by_id(request.observation)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!("observation not found: {}", request.observation))
        })?;

    let entity = repo.create(request.observation, &request.name).await?;

    info!(
        note_id = %entity.id,
        observation_id = %entity.observation_id,
        name = %entity.name,
        "Note attached"
    );
    Ok(StatusCode::CREATED)
}
