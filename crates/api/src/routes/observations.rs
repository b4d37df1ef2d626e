//! Observation endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use persistence::repositories::{
    CreateObservationInput, ObservationRepository, ObserverRepository, StationRepository,
};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics;
use domain::models::observation::{CreateObservationRequest, CreateObservationResponse};

/// Record an observation against a station.
///
/// POST /api/v1/observations
pub async fn create_observation(
    State(state): State<AppState>,
    Json(request): Json<CreateObservationRequest>,
) -> Result<(StatusCode, Json<CreateObservationResponse>), ApiError> {
    request.validate()?;

    // Station and observer are named by natural key and must resolve
    // before anything is written. The classification reference is checked
    // by the insert itself.
    let station = StationRepository::new(state.pool.clone())
        .get_by_national_id(&request.station)
        .await?;
    let observer = ObserverRepository::new(state.pool.clone())
        .get_by_email(&request.observer)
        .await?;

    let entity = ObservationRepository::new(state.pool.clone())
        .create(CreateObservationInput {
            station_id: station.id,
            observer_id: observer.id,
            classification_id: request.classification,
            filled_checklist: request.filled_checklist,
        })
        .await?;

    metrics::record_observation_recorded();
    info!(
        observation_id = %entity.id,
        station = %request.station,
        observer = %request.observer,
        "Observation recorded"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateObservationResponse {
            observation: entity.id,
        }),
    ))
}
