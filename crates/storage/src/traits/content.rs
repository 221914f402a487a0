//! Content entity queries: chats, files, knowledge bases, messages.
//!
//! Every trait exposes the same matrix: count-all, fetch-all, count/fetch by
//! owning user, count/fetch by creation-time window. Window bounds are epoch
//! seconds except for [`MessageStore`], whose timestamps are nanoseconds —
//! callers convert with [`TimeRange::as_nanos`] before filtering.

use async_trait::async_trait;
use hubstats_core::{Chat, FileEntry, KnowledgeBase, Message};

use crate::error::StoreError;
use crate::types::TimeRange;

/// Chat queries. `created_at` is epoch seconds.
#[async_trait]
pub trait ChatStore: Send + Sync {
    async fn count_chats(&self) -> Result<u64, StoreError>;

    async fn list_chats(&self) -> Result<Vec<Chat>, StoreError>;

    async fn count_chats_for_user(&self, user_id: &str) -> Result<u64, StoreError>;

    async fn list_chats_for_user(&self, user_id: &str) -> Result<Vec<Chat>, StoreError>;

    /// Chats created within a half-open seconds window.
    async fn count_chats_created_in(&self, range: TimeRange) -> Result<u64, StoreError>;

    async fn list_chats_created_in(&self, range: TimeRange) -> Result<Vec<Chat>, StoreError>;
}

/// File queries. `created_at` is epoch seconds.
#[async_trait]
pub trait FileStore: Send + Sync {
    async fn count_files(&self) -> Result<u64, StoreError>;

    async fn list_files(&self) -> Result<Vec<FileEntry>, StoreError>;

    async fn count_files_for_user(&self, user_id: &str) -> Result<u64, StoreError>;

    async fn list_files_for_user(&self, user_id: &str) -> Result<Vec<FileEntry>, StoreError>;

    /// Files created within a half-open seconds window.
    async fn count_files_created_in(&self, range: TimeRange) -> Result<u64, StoreError>;

    async fn list_files_created_in(&self, range: TimeRange) -> Result<Vec<FileEntry>, StoreError>;
}

/// Knowledge-base queries. `created_at` is epoch seconds.
#[async_trait]
pub trait KnowledgeBaseStore: Send + Sync {
    async fn count_knowledge_bases(&self) -> Result<u64, StoreError>;

    async fn list_knowledge_bases(&self) -> Result<Vec<KnowledgeBase>, StoreError>;

    async fn count_knowledge_bases_for_user(&self, user_id: &str) -> Result<u64, StoreError>;

    async fn list_knowledge_bases_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<KnowledgeBase>, StoreError>;

    /// Knowledge bases created within a half-open seconds window.
    async fn count_knowledge_bases_created_in(&self, range: TimeRange) -> Result<u64, StoreError>;

    async fn list_knowledge_bases_created_in(
        &self,
        range: TimeRange,
    ) -> Result<Vec<KnowledgeBase>, StoreError>;
}

/// Message queries. `created_at` is epoch **nanoseconds**.
#[async_trait]
pub trait MessageStore: Send + Sync {
    async fn count_messages(&self) -> Result<u64, StoreError>;

    async fn list_messages(&self) -> Result<Vec<Message>, StoreError>;

    async fn count_messages_for_user(&self, user_id: &str) -> Result<u64, StoreError>;

    async fn list_messages_for_user(&self, user_id: &str) -> Result<Vec<Message>, StoreError>;

    /// Messages created within a half-open window whose bounds are already
    /// in nanoseconds.
    async fn count_messages_created_in(&self, range: TimeRange) -> Result<u64, StoreError>;

    async fn list_messages_created_in(&self, range: TimeRange) -> Result<Vec<Message>, StoreError>;
}
