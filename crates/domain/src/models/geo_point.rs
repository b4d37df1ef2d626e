//! Geographic point shared by stations and location reports.

use geo::{point, HaversineDistance};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    #[validate(custom(function = "shared::validation::validate_latitude"))]
    pub latitude: f64,

    #[validate(custom(function = "shared::validation::validate_longitude"))]
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to another point, in meters.
    pub fn distance_meters(&self, other: &GeoPoint) -> f64 {
        let a = point!(x: self.longitude, y: self.latitude);
        let b = point!(x: other.longitude, y: other.latitude);
        a.haversine_distance(&b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = GeoPoint::new(19.432608, -99.133209);
        assert_eq!(p.distance_meters(&p), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        // Zocalo to Angel de la Independencia, roughly 2.4 km
        let zocalo = GeoPoint::new(19.432608, -99.133209);
        let angel = GeoPoint::new(19.426970, -99.167656);
        let d1 = zocalo.distance_meters(&angel);
        let d2 = angel.distance_meters(&zocalo);
        assert!((d1 - d2).abs() < 1e-6);
        assert!(d1 > 3_000.0 && d1 < 4_500.0);
    }

    #[test]
    fn test_validation_rejects_out_of_range() {
        let bad_lat = GeoPoint::new(91.0, 0.0);
        assert!(bad_lat.validate().is_err());
        let bad_lon = GeoPoint::new(0.0, -181.0);
        assert!(bad_lon.validate().is_err());
        let ok = GeoPoint::new(19.4, -99.1);
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_serde_camel_case() {
        let p = GeoPoint::new(19.4, -99.1);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"latitude":19.4,"longitude":-99.1}"#);
    }
}
