//! Application services orchestrating repositories for route handlers.

pub mod availability;
pub mod directory;

pub use availability::AvailabilityEngine;
pub use directory::StationDirectory;
