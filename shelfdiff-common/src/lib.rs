//! Shared types for the shelfdiff reconciliation service
//!
//! Holds the error taxonomy and configuration structures used by the
//! reconciler binary. Kept separate so tooling and future binaries share
//! one definition of both.

pub mod config;
pub mod error;

pub use config::Settings;
pub use error::{Error, Result};
