//! Domain models for the Observatorio Electoral backend.

pub mod classification;
pub mod district;
pub mod geo_point;
pub mod location;
pub mod media;
pub mod note;
pub mod observation;
pub mod observer;
pub mod station;

pub use classification::Classification;
pub use district::District;
pub use geo_point::GeoPoint;
pub use location::LocationReport;
pub use media::Media;
pub use note::Note;
pub use observation::Observation;
pub use observer::Observer;
pub use station::Station;
