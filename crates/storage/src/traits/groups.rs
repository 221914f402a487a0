//! Group directory queries.

use async_trait::async_trait;
use hubstats_core::Group;

use crate::error::StoreError;

/// Group queries.
#[async_trait]
pub trait GroupStore: Send + Sync {
    /// All groups in stable id order; the fetch order is the tie-break
    /// order for the activity ranking.
    async fn list_groups(&self) -> Result<Vec<Group>, StoreError>;
}
