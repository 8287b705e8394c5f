//! Input validation errors.
//!
//! Every variant is fatal: a run that hits one aborts before any algorithm
//! starts.  Downstream crates wrap `ValidationError` as one variant of their
//! own error enums.

use thiserror::Error;

use crate::RoadId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("road {id}: length {length} must be a positive 32-bit integer")]
    InvalidLength { id: RoadId, length: i64 },

    #[error("road id {0} appears more than once")]
    DuplicateRoadId(RoadId),

    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },
}

/// Shorthand result type for validation steps.
pub type ValidationResult<T> = Result<T, ValidationError>;
