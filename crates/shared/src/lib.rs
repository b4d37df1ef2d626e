//! Shared utilities for the Observatorio Electoral backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Common validation logic (geographic coordinates, search radii)

pub mod validation;
