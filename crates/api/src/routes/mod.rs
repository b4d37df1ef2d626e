//! HTTP route handlers.

pub mod classifications;
pub mod districts;
pub mod health;
pub mod locations;
pub mod media;
pub mod notes;
pub mod observations;
pub mod observers;
pub mod stations;
