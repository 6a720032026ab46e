//! Error types for imsakiyah

use thiserror::Error;

use crate::LocationKey;

/// Errors in resolving what the user asked for
#[derive(Debug, Error)]
pub enum ImsakiyahError {
    #[error("Schedule not found for {0}")]
    ScheduleNotFound(LocationKey),

    #[error("No location selected; pass --province and --city or run `search` first")]
    NoLocation,

    #[error("Both province and city are required")]
    IncompleteLocation,

    #[error("Day {day} is outside the schedule (1-{len})")]
    InvalidDay { day: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, ImsakiyahError>;
