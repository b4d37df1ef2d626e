//! Location report endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use persistence::repositories::{LocationReportRepository, ObserverRepository};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics;
use crate::services::StationDirectory;
use domain::models::location::{CreateLocationReportRequest, CreateLocationReportResponse};
use domain::models::GeoPoint;

/// Record an observer location report and look for a nearby station.
///
/// POST /api/v1/locations
///
/// The report is stored regardless of the proximity outcome; a search
/// that finds nothing just leaves `stationNear` out of the response.
pub async fn create_location_report(
    State(state): State<AppState>,
    Json(request): Json<CreateLocationReportRequest>,
) -> Result<(StatusCode, Json<CreateLocationReportResponse>), ApiError> {
    request.validate()?;

    let observer = ObserverRepository::new(state.pool.clone())
        .get_by_email(&request.observer)
        .await?;

    let report = LocationReportRepository::new(state.pool.clone())
        .create(observer.id, request.latitude, request.longitude)
        .await?;

    let point = GeoPoint::new(request.latitude, request.longitude);
    let radius = state.config.proximity.location_report_radius_meters;
    let directory = StationDirectory::new(state.pool.clone());
    let station_near = match directory.nearest_station(point, radius).await {
        Ok(station) => Some(station.national_id),
        Err(ApiError::NotFound(_)) => None,
        Err(other) => return Err(other),
    };

    metrics::record_location_report(station_near.is_some());
    info!(
        report_id = %report.id,
        observer = %request.observer,
        station_found = station_near.is_some(),
        "Location report recorded"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateLocationReportResponse { station_near }),
    ))
}
