//! Error types for the smoke-test harness

use thiserror::Error;

/// Result type alias using SmokeError
pub type SmokeResult<T> = std::result::Result<T, SmokeError>;

/// Fatal harness errors. Per-check findings are plain issue strings on
/// [`crate::checks::CheckResult`]; only startup and I/O problems abort a
/// run.
#[derive(Error, Debug)]
pub enum SmokeError {
    #[error("startup failed: {0}")]
    Startup(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
