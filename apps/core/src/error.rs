use std::io;
use thiserror::Error;

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents classifier training failures (e.g. too few intents).
    #[error("Training error: {0}")]
    Training(String),

    /// Represents data validation errors (e.g. empty transcript, unknown category).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}
