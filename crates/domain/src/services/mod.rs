//! Domain services.
//!
//! Services contain the decision logic of the platform, kept free of any
//! storage concern so it can be exercised directly in unit tests.

pub mod availability;
pub mod proximity;

pub use availability::{filter_available, ObservedClassification};
pub use proximity::{first_resolvable, StationResolver};
