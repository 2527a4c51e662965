//! Server error types

use thiserror::Error;

/// Result type alias using [`ServerError`]
pub type Result<T> = std::result::Result<T, ServerError>;

/// Failures while starting or running the console server.
///
/// Rendering the console never fails; these only come from the hosting layer.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
