//! Domain layer for the Observatorio Electoral backend.
//!
//! This crate contains:
//! - Domain models (Observer, District, Station, Classification, ...)
//! - The core error taxonomy (creation, lookup, index search)
//! - Pure decision logic (classification availability, candidate resolution)

pub mod error;
pub mod models;
pub mod services;
