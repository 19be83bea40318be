//! Driver collaborator errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("Browser executable not found. Install Google Chrome or Chromium.")]
    BrowserNotFound,

    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    #[error("Browser endpoint never became ready: {0}")]
    NotReady(String),

    #[error("Failed to release driver session: {0}")]
    ReleaseFailed(String),

    #[error("{0}")]
    Custom(String),
}
