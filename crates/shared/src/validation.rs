//! Common validation utilities.

use validator::ValidationError;

/// Maximum accepted observer age.
const MAX_OBSERVER_AGE: i32 = 120;

/// Validates that a latitude value is within valid range (-90 to 90).
pub fn validate_latitude(lat: f64) -> Result<(), ValidationError> {
    if (-90.0..=90.0).contains(&lat) {
        Ok(())
    } else {
        let mut err = ValidationError::new("latitude_range");
        err.message = Some("Latitude must be between -90 and 90".into());
        Err(err)
    }
}

/// Validates that a longitude value is within valid range (-180 to 180).
pub fn validate_longitude(lon: f64) -> Result<(), ValidationError> {
    if (-180.0..=180.0).contains(&lon) {
        Ok(())
    } else {
        let mut err = ValidationError::new("longitude_range");
        err.message = Some("Longitude must be between -180 and 180".into());
        Err(err)
    }
}

/// Validates that a search radius is non-negative.
pub fn validate_radius_meters(radius: f64) -> Result<(), ValidationError> {
    if radius >= 0.0 {
        Ok(())
    } else {
        let mut err = ValidationError::new("radius_range");
        err.message = Some("Radius must be non-negative".into());
        Err(err)
    }
}

/// Validates that an observer age is plausible (0 to 120).
pub fn validate_age(age: i32) -> Result<(), ValidationError> {
    if (0..=MAX_OBSERVER_AGE).contains(&age) {
        Ok(())
    } else {
        let mut err = ValidationError::new("age_range");
        err.message = Some("Age must be between 0 and 120".into());
        Err(err)
    }
}
