//! Persistence layer for the Observatorio Electoral backend.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings)
//! - Repository implementations (the entity store)
//! - The geospatial index repository

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;
