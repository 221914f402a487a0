//! Derived summary types returned by the dashboard operations.
//!
//! Computed fresh on every request, never persisted. Megabyte figures and
//! percentages in these types are already rounded for presentation.

use serde::{Deserialize, Serialize};

/// The fixed content taxonomy used throughout the dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContentCategory {
    Chats,
    Files,
    Images,
    Knowledge,
    Messages,
}

impl ContentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chats => "chats",
            Self::Files => "files",
            Self::Images => "images",
            Self::Knowledge => "knowledge",
            Self::Messages => "messages",
        }
    }
}

/// One row of the content-type breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentTypeStats {
    pub content_type: ContentCategory,
    pub count: u64,
    /// Share of the summed counts across all five categories; 0 when the
    /// store is empty.
    pub percentage: f64,
    pub total_size_mb: f64,
}

/// Per-user usage summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStorageStats {
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    pub total_chats: u64,
    pub total_files: u64,
    pub total_images: u64,
    pub total_knowledge: u64,
    pub total_messages: u64,
    pub storage_usage_mb: f64,
    /// Seconds since epoch.
    pub last_active: i64,
}

/// Per-group activity summary.
///
/// Counts and storage are sums over member users with no deduplication
/// across groups: a user who belongs to two groups contributes fully to
/// both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupActivityStats {
    pub group_id: String,
    pub group_name: String,
    pub member_count: u64,
    pub total_chats: u64,
    pub total_files: u64,
    pub total_images: u64,
    pub total_knowledge: u64,
    pub total_messages: u64,
    pub storage_usage_mb: f64,
}

impl GroupActivityStats {
    /// Ranking key for the activity listing: chats + files + images +
    /// knowledge. Messages are excluded.
    pub fn activity(&self) -> u64 {
        self.total_chats + self.total_files + self.total_images + self.total_knowledge
    }
}

/// One calendar-day bucket of the time series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeBucketStats {
    /// Bucket start date, UTC `%Y-%m-%d`.
    pub period: String,
    pub chats_created: u64,
    pub files_uploaded: u64,
    pub images_generated: u64,
    pub knowledge_created: u64,
    pub messages_sent: u64,
    pub storage_used_mb: f64,
}

/// Global dashboard overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardOverview {
    pub total_users: u64,
    pub active_users_7d: u64,
    pub active_users_30d: u64,
    pub total_chats: u64,
    pub total_files: u64,
    pub total_images: u64,
    pub total_knowledge: u64,
    pub total_messages: u64,
    pub total_storage_mb: f64,
    pub content_type_breakdown: Vec<ContentTypeStats>,
    pub top_users_by_storage: Vec<UserStorageStats>,
    pub top_groups_by_activity: Vec<GroupActivityStats>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_snake_case() {
        let json = serde_json::to_string(&ContentCategory::Knowledge).unwrap();
        assert_eq!(json, "\"knowledge\"");
    }

    #[test]
    fn test_group_activity_excludes_messages() {
        let stats = GroupActivityStats {
            group_id: "g1".to_string(),
            group_name: "ops".to_string(),
            member_count: 2,
            total_chats: 1,
            total_files: 2,
            total_images: 1,
            total_knowledge: 3,
            total_messages: 500,
            storage_usage_mb: 0.0,
        };
        assert_eq!(stats.activity(), 7);
    }
}
