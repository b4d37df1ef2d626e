//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod classification;
pub mod district;
pub mod geo_index;
pub mod location;
pub mod media;
pub mod note;
pub mod observation;
pub mod observer;
pub mod station;

pub use classification::ClassificationEntity;
pub use district::DistrictEntity;
pub use geo_index::StationGeoEntity;
pub use location::LocationReportEntity;
pub use media::{MediaEntity, MediaTypeDb};
pub use note::NoteEntity;
pub use observation::{ObservationEntity, ObservedClassificationRow};
pub use observer::{AccountTypeDb, ObserverEntity};
pub use station::StationEntity;
