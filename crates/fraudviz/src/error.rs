//! Application-wide error types using thiserror.

use fraudviz_common::FraudVizError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Chart generation or configuration failure.
    #[error(transparent)]
    Generation(#[from] FraudVizError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be serialized for logging.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for the application.
pub type AppResult<T> = Result<T, AppError>;
