//! District endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use persistence::repositories::DistrictRepository;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::district::{CreateDistrictRequest, DistrictResponse};

/// Register a new district.
///
/// POST /api/v1/districts
pub async fn create_district(
    State(state): State<AppState>,
    Json(request): Json<CreateDistrictRequest>,
) -> Result<(StatusCode, Json<DistrictResponse>), ApiError> {
    request.validate()?;

    let repo = DistrictRepository::new(state.pool.clone());

    // Friendly pre-check; the UNIQUE constraint is the real authority.
    if repo.exists(&request.national_id).await? {
        return Err(ApiError::Conflict(format!(
            "district already exists: {}",
            request.national_id
        )));
    }

    let entity = repo.create(&request.national_id, &request.name).await?;

    let district: domain::models::District = entity.into();
    info!(district_id = %district.id, national_id = %district.national_id, "District registered");

    Ok((StatusCode::CREATED, Json(district.into())))
}
