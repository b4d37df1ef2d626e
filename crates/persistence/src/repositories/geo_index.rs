//! Geospatial index repository: radius search over indexed stations.
//!
//! The index is a denormalized (station id, point) projection kept next
//! to the stations table. Searches run a coarse bounding-box prefilter in
//! SQL and an exact haversine pass in process, returning candidates in
//! index insertion order.

use domain::error::IndexSearchError;
use domain::models::GeoPoint;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::StationGeoEntity;
use crate::metrics::QueryTimer;

const METERS_PER_DEGREE_LAT: f64 = 111_320.0;

/// Repository for the station geospatial index.
#[derive(Clone)]
pub struct GeoIndexRepository {
    pool: PgPool,
}

impl GeoIndexRepository {
    /// Creates a new GeoIndexRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert or refresh a station's entry in the index.
    pub async fn index(&self, station_id: Uuid, point: GeoPoint) -> Result<(), IndexSearchError> {
        let timer = QueryTimer::new("geo_index_station");
        sqlx::query(
            r#"
            INSERT INTO station_geo_index (station_id, latitude, longitude)
            VALUES ($1, $2, $3)
            ON CONFLICT (station_id)
            DO UPDATE SET latitude = $2, longitude = $3, indexed_at = NOW()
            "#,
        )
        .bind(station_id)
        .bind(point.latitude)
        .bind(point.longitude)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(())
    }

    /// Ids of indexed stations within `radius_meters` of the center, in
    /// the order the index stored them. Proximity does not affect order.
    pub async fn search_within(
        &self,
        center: GeoPoint,
        radius_meters: f64,
    ) -> Result<Vec<Uuid>, IndexSearchError> {
        let (lat_min, lat_max, lon_min, lon_max) = bounding_box(&center, radius_meters);

        let timer = QueryTimer::new("geo_index_search");
        let candidates = sqlx::query_as::<_, StationGeoEntity>(
            r#"
            SELECT * FROM station_geo_index
            WHERE latitude BETWEEN $1 AND $2
              AND longitude BETWEEN $3 AND $4
            ORDER BY indexed_at
            "#,
        )
        .bind(lat_min)
        .bind(lat_max)
        .bind(lon_min)
        .bind(lon_max)
        .fetch_all(&self.pool)
        .await?;
        timer.record();

        Ok(filter_within_radius(&center, radius_meters, &candidates))
    }
}

/// Degree-space bounding box for the prefilter. Over-approximates near
/// the poles, which is fine: the exact pass discards the excess.
fn bounding_box(center: &GeoPoint, radius_meters: f64) -> (f64, f64, f64, f64) {
    let lat_delta = radius_meters / METERS_PER_DEGREE_LAT;
    let lon_scale = center.latitude.to_radians().cos().max(0.01);
    let lon_delta = radius_meters / (METERS_PER_DEGREE_LAT * lon_scale);

    (
        center.latitude - lat_delta,
        center.latitude + lat_delta,
        center.longitude - lon_delta,
        center.longitude + lon_delta,
    )
}

/// Exact haversine filter over the prefiltered candidates, preserving
/// their order.
fn filter_within_radius(
    center: &GeoPoint,
    radius_meters: f64,
    candidates: &[StationGeoEntity],
) -> Vec<Uuid> {
    candidates
        .iter()
        .filter(|entry| center.distance_meters(&entry.point()) <= radius_meters)
        .map(|entry| entry.station_id)
        .collect()
}
