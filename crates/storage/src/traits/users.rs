//! User directory queries.

use async_trait::async_trait;
use hubstats_core::User;

use crate::error::StoreError;

/// User queries. `last_active_at` is epoch seconds.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn count_users(&self) -> Result<u64, StoreError>;

    /// Users whose last activity is at or after `since` (epoch seconds).
    async fn count_users_active_since(&self, since: i64) -> Result<u64, StoreError>;

    /// All users in stable id order, optionally capped. The fetch order is
    /// the tie-break order for every ranking downstream.
    async fn list_users(&self, limit: Option<usize>) -> Result<Vec<User>, StoreError>;
}
