//! Repository implementations for database operations.
//!
//! Repositories enforce the store contracts: creation is an atomic
//! insert-if-absent backed by UNIQUE constraints, and lookups by natural
//! key fail loudly when zero or more than one record matches.

pub mod classification;
pub mod district;
pub mod geo_index;
pub mod location;
pub mod media;
pub mod note;
pub mod observation;
pub mod observer;
pub mod station;

pub use classification::ClassificationRepository;
pub use district::DistrictRepository;
pub use geo_index::GeoIndexRepository;
pub use location::LocationReportRepository;
pub use media::MediaRepository;
pub use note::NoteRepository;
pub use observation::{CreateObservationInput, ObservationRepository};
pub use observer::ObserverRepository;
pub use station::{CreateStationInput, StationRepository};

use domain::error::CreationError;

/// Translates a failed insert into the creation taxonomy.
///
/// Unique violations (23505) become duplicates; foreign-key violations
/// (23503) become missing references, named after the violated constraint.
/// Everything else is a storage fault.
pub(crate) fn creation_error(entity: &'static str, key: &str, err: sqlx::Error) -> CreationError {
    if let sqlx::Error::Database(db_err) = &err {
        match db_err.code().as_deref() {
            Some("23505") => return CreationError::duplicate(entity, key),
            Some("23503") => {
                let reference = match db_err.constraint() {
                    Some(c) if c.contains("district") => "district",
                    Some(c) if c.contains("classification") => "classification",
                    Some(c) if c.contains("observation") => "observation",
                    Some(c) if c.contains("observer") => "observer",
                    Some(c) if c.contains("station") => "station",
                    _ => "reference",
                };
                return CreationError::missing_reference(entity, reference, key);
            }
            _ => {}
        }
    }
    CreationError::storage(entity, err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_map_to_storage() {
        let err = creation_error("observer", "ana@example.com", sqlx::Error::RowNotFound);
        assert!(matches!(err, CreationError::Storage { entity: "observer", .. }));
    }
}
