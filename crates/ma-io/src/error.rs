//! Error types for ma-io.

use ma_core::ValidationError;
use thiserror::Error;

/// Errors that can occur when reading a map or writing a report.
#[derive(Debug, Error)]
pub enum MapIoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("map input is empty: expected a `source<TAB>target` header line")]
    MissingHeader,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Alias for `Result<T, MapIoError>`.
pub type MapIoResult<T> = Result<T, MapIoError>;
