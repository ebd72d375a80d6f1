//! HTTP API handlers

pub mod health;
pub mod process;

pub use health::{health_check, health_routes, HealthResponse};
pub use process::{process_data, process_routes, ProcessResponse};
