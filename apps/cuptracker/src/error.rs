//! # Application Errors
//!
//! Everything that can go wrong between the terminal and the backend. Stage
//! resolution itself cannot fail; a team with no known stage is rendered as
//! a placeholder and never reaches this type.

use thiserror::Error;

/// Errors raised by the presentation adapter.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file or environment is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A local file could not be read.
    #[error("I/O error: {0}")]
    Io(String),

    /// The backend could not be reached.
    #[error("Cannot connect to backend at {0}")]
    ConnectionFailed(String),

    /// 401 Unauthorized - missing or expired session token.
    #[error("Unauthorized: log in on the website and refresh your token")]
    Unauthorized,

    /// The backend answered with a non-success status.
    #[error("Backend returned {0}: {1}")]
    Status(u16, String),

    /// A response or file body was not the expected JSON.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl AppError {
    /// Short message shown to the user in place of the data that failed to load.
    #[must_use]
    pub fn fallback_message(&self) -> &'static str {
        match self {
            AppError::Config(_) => "Check your cuptracker configuration and try again.",
            AppError::Io(_) => "The requested file could not be read.",
            AppError::ConnectionFailed(_) => "The prediction game server is unreachable right now.",
            AppError::Unauthorized => "You are not logged in.",
            AppError::Status(..) | AppError::Parse(_) => {
                "Failed to load data from the prediction game server."
            }
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e.to_string())
    }
}
