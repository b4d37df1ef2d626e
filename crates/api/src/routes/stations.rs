//! Station endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::services::{AvailabilityEngine, StationDirectory};
use domain::models::classification::ClassificationListResponse;
use domain::models::station::{
    AssignStationRequest, CreateStationRequest, StationDetailResponse,
};
use domain::models::GeoPoint;

/// Query parameters for the nearest-station search.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NearestStationQuery {
    #[validate(custom(function = "shared::validation::validate_latitude"))]
    pub latitude: f64,

    #[validate(custom(function = "shared::validation::validate_longitude"))]
    pub longitude: f64,

    /// Search radius in meters; falls back to the configured default.
    #[validate(custom(function = "shared::validation::validate_radius_meters"))]
    pub radius_meters: Option<f64>,
}

/// Register a new station inside an existing district.
///
/// POST /api/v1/stations
pub async fn create_station(
    State(state): State<AppState>,
    Json(request): Json<CreateStationRequest>,
) -> Result<(StatusCode, Json<StationDetailResponse>), ApiError> {
    request.validate()?;

    let district = request.district.clone();
    let directory = StationDirectory::new(state.pool.clone());
    let station = directory.create_station(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(StationDetailResponse::from_station(station, district, None)),
    ))
}

/// Station detail, with district and observer rendered by natural key.
///
/// GET /api/v1/stations/:national_id
pub async fn get_station(
    State(state): State<AppState>,
    Path(national_id): Path<String>,
) -> Result<Json<StationDetailResponse>, ApiError> {
    let directory = StationDirectory::new(state.pool.clone());
    let detail = directory.station_detail(&national_id).await?;

    Ok(Json(detail))
}

/// Assign a station to an observer.
///
/// POST /api/v1/stations/:national_id/assign
pub async fn assign_station(
    State(state): State<AppState>,
    Path(national_id): Path<String>,
    Json(request): Json<AssignStationRequest>,
) -> Result<StatusCode, ApiError> {
    request.validate()?;

    let directory = StationDirectory::new(state.pool.clone());
    let station = directory.assign(&national_id, &request.observer).await?;

    info!(
        national_id = %station.national_id,
        observer = %request.observer,
        "Station assignment updated"
    );
    Ok(StatusCode::NO_CONTENT)
}

/// First indexed station within the radius that still resolves.
///
/// GET /api/v1/stations/nearest?latitude=..&longitude=..
pub async fn get_nearest_station(
    State(state): State<AppState>,
    Query(query): Query<NearestStationQuery>,
) -> Result<Json<StationDetailResponse>, ApiError> {
    query.validate()?;

    let radius = query
        .radius_meters
        .unwrap_or(state.config.proximity.station_search_radius_meters);
    let center = GeoPoint::new(query.latitude, query.longitude);

    let directory = StationDirectory::new(state.pool.clone());
    let station = directory.nearest_station(center, radius).await?;
    let detail = directory.station_detail(&station.national_id).await?;

    Ok(Json(detail))
}

/// Classifications still applicable at a station.
///
/// GET /api/v1/stations/:national_id/classifications
pub async fn get_station_classifications(
    State(state): State<AppState>,
    Path(national_id): Path<String>,
) -> Result<Json<ClassificationListResponse>, ApiError> {
    let engine = AvailabilityEngine::new(state.pool.clone());
    let classifications = engine.available_for(&national_id).await?;

    Ok(Json(ClassificationListResponse { classifications }))
}
