//! Error types for apptcal.

use thiserror::Error;

/// Errors that can occur in apptcal operations.
#[derive(Error, Debug)]
pub enum AppointmentError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid category: {0:?}")]
    InvalidCategory(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for apptcal operations.
pub type AppointmentResult<T> = Result<T, AppointmentError>;
