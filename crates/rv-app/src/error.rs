//! Error types for the rv-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for both CLI and GUI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read params file: {path}")]
    ParamsFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write params file: {path}")]
    ParamsFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Params error: {0}")]
    Params(String),

    #[error("Params validation failed: {0}")]
    Validation(String),

    #[error("Field error: {0}")]
    Field(#[from] rv_field::FieldError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
