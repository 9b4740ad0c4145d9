//! Core library for the listing advisor: the seller taxonomy, the tier
//! recommendation engine, and the HTTP router fragment the API service mounts.

pub mod advisor;
pub mod config;
pub mod error;
pub mod telemetry;
