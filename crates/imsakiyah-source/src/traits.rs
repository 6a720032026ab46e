//! Schedule source trait

use async_trait::async_trait;
use imsakiyah_api::ImsakiyahData;
use imsakiyah_util::LocationKey;
use thiserror::Error;

/// Errors from schedule source operations
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Request failed: {0}")]
    Http(String),

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("No schedule for {0}")]
    NotFound(LocationKey),
}

pub type SourceResult<T> = Result<T, SourceError>;

/// Supplier of locations and schedules
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    /// All province names
    async fn provinces(&self) -> SourceResult<Vec<String>>;

    /// City/regency names within a province
    async fn cities(&self, province: &str) -> SourceResult<Vec<String>>;

    /// Schedules for a location, as returned by the source
    async fn schedule(&self, location: &LocationKey) -> SourceResult<Vec<ImsakiyahData>>;

    /// The schedule for a location, or `NotFound` when the source has none
    async fn first_schedule(&self, location: &LocationKey) -> SourceResult<ImsakiyahData> {
        self.schedule(location)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| SourceError::NotFound(location.clone()))
    }
}
