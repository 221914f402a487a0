//! Typed error enum for the storage layer.

use thiserror::Error;

/// Storage-layer error for the read-only analytics queries.
///
/// All operations are single-shot reads; a failure is reported immediately
/// with no retry. Absent rows are empty aggregates, not errors, so there is
/// no not-found variant.
#[derive(Debug, Error)]
pub enum StoreError {
    /// SQL / connection / timeout failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure.
    #[error("migration error: {0}")]
    Migration(String),
}
