//! Error types for eventdesk.

use thiserror::Error;

/// Errors that can occur while building a digest.
///
/// Acquisition and merging never hand these to the caller: the stages turn
/// them into empty outcomes plus a diagnostic. They surface only from the
/// boundary (configuration, date arguments).
#[derive(Error, Debug)]
pub enum EventDeskError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("{url} answered with status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Timed out after {0}s")]
    Timeout(u64),

    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Feed parse error: {0}")]
    FeedParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for EventDeskError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return EventDeskError::Fetch(format!("request timed out: {err}"));
        }
        EventDeskError::Fetch(err.to_string())
    }
}

/// Result type alias for eventdesk operations.
pub type EventDeskResult<T> = Result<T, EventDeskError>;
