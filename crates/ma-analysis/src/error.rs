use ma_core::ValidationError;
use ma_network::NetworkError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("invalid road list: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Network(#[from] NetworkError),
}

impl AnalysisError {
    /// `true` if the input was rejected before any algorithm ran.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Network(NetworkError::Validation(_)))
    }
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
