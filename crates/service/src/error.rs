//! Typed error enum for the service layer.

use hubstats_storage::StoreError;
use thiserror::Error;

/// Service-layer error for the dashboard operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Store query failed while collecting or computing an aggregate.
    #[error("store: {0}")]
    Store(#[from] StoreError),

    /// Caller provided invalid input (unknown period keyword). Raised
    /// before any store access.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ServiceError {
    /// Whether this error is a caller mistake rather than a backend
    /// failure.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
