//! Network-subsystem error type.

use thiserror::Error;

use ma_core::ValidationError;

/// Errors produced by `ma-network`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("city {0:?} not found in network")]
    UnknownCity(String),

    #[error("no route from {from} to {to}")]
    UnreachableCity { from: String, to: String },

    #[error("road network is disconnected: {settled} of {total} cities reachable from {start}")]
    DisconnectedGraph { start: String, settled: usize, total: usize },
}

pub type NetworkResult<T> = Result<T, NetworkError>;
