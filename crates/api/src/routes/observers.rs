//! Observer endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use persistence::repositories::ObserverRepository;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::services::StationDirectory;
use domain::models::observer::{CreateObserverRequest, ObserverResponse};
use domain::models::station::ObserverStationsResponse;

/// Register a new observer.
///
/// POST /api/v1/observers
pub async fn create_observer(
    State(state): State<AppState>,
    Json(request): Json<CreateObserverRequest>,
) -> Result<(StatusCode, Json<ObserverResponse>), ApiError> {
    request.validate()?;

    let repo = ObserverRepository::new(state.pool.clone());

    // Friendly pre-check; the UNIQUE constraint is the real authority.
    if repo.exists(&request.email).await? {
        return Err(ApiError::Conflict(format!(
            "observer already exists: {}",
            request.email
        )));
    }

    let entity = repo
        .create(
            &request.email,
            &request.name,
            request.age,
            request.account_type.into(),
            &request.installation_id,
        )
        .await?;

    let observer: domain::models::Observer = entity.into();
    info!(observer_id = %observer.id, email = %observer.email, "Observer registered");

    Ok((StatusCode::CREATED, Json(observer.into())))
}

/// Get an observer by email.
///
/// GET /api/v1/observers/:email
pub async fn get_observer(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<ObserverResponse>, ApiError> {
    let repo = ObserverRepository::new(state.pool.clone());
    let entity = repo.get_by_email(&email).await?;
    let observer: domain::models::Observer = entity.into();

    Ok(Json(observer.into()))
}

/// List the national ids of the stations assigned to an observer.
///
/// GET /api/v1/observers/:email/stations
pub async fn get_observer_stations(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<ObserverStationsResponse>, ApiError> {
    let directory = StationDirectory::new(state.pool.clone());
    let stations = directory.stations_for_observer(&email).await?;

    Ok(Json(ObserverStationsResponse { stations }))
}
