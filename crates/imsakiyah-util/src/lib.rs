//! Shared utilities for imsakiyah
//!
//! This crate provides:
//! - ID types (DateKey, LocationKey)
//! - Time utilities (mockable wall clock, Indonesian date labels)
//! - Error types
//! - Default paths for config and data directories

mod error;
mod ids;
mod paths;
mod time;

pub use error::*;
pub use ids::*;
pub use paths::*;
pub use time::*;
