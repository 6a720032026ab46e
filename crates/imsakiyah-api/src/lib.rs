//! Shared API types for imsakiyah
//!
//! This crate defines:
//! - The remote imsakiyah API envelope and schedule records
//! - Prayer-time names in display order
//! - Notification events shown to the user

mod events;
mod types;

pub use events::*;
pub use types::*;

/// Base URL of the public imsakiyah API
pub const DEFAULT_API_BASE_URL: &str = "https://equran.id/api/v2/imsakiyah";
