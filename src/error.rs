// Error types

use thiserror::Error;

use crate::models::event::EventId;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum CalendarError {
    /// The record violates a model invariant; nothing was persisted.
    #[error("validation failed: {0}")]
    Validation(String),

    /// No persisted record carries this id.
    #[error("event {0} not found")]
    NotFound(EventId),

    /// The storage layer failed; the underlying error is preserved.
    #[error("persistence error: {0}")]
    Persistence(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<rusqlite::Error> for CalendarError {
    fn from(err: rusqlite::Error) -> Self {
        CalendarError::Persistence(Box::new(err))
    }
}

impl From<serde_json::Error> for CalendarError {
    fn from(err: serde_json::Error) -> Self {
        CalendarError::Persistence(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, CalendarError>;
