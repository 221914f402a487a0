//! Dashboard aggregation.
//!
//! Every operation recomputes from the store: collect raw entities, classify
//! files, estimate storage, combine, rank, truncate. Rounding happens once
//! per presented figure; ranking uses the presented (rounded) storage value
//! so equal-looking rows never reorder.

use std::cmp::Ordering;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use hubstats_core::{
    ContentCategory, ContentTypeStats, DEFAULT_LISTING_LIMIT, DashboardOverview, Group,
    GroupActivityStats, Period, SECONDS_PER_DAY, StorageEstimate, TOP_RANKED, TimeBucketStats,
    User, UserStorageStats, count_images, round2,
};
use hubstats_storage::{AnalyticsStore, TimeRange};

use crate::ServiceError;

/// Read-only usage-analytics aggregator over a content store.
pub struct DashboardService {
    store: Arc<dyn AnalyticsStore>,
}

/// Per-owner raw usage: counts plus the unrounded storage estimate.
struct OwnerUsage {
    chats: u64,
    files: u64,
    images: u64,
    knowledge: u64,
    messages: u64,
    estimate: StorageEstimate,
}

/// Store-wide counts plus the unrounded storage estimate.
struct GlobalTotals {
    chats: u64,
    files: u64,
    images: u64,
    knowledge: u64,
    messages: u64,
    estimate: StorageEstimate,
}

impl DashboardService {
    #[must_use]
    pub fn new(store: Arc<dyn AnalyticsStore>) -> Self {
        Self { store }
    }

    /// Global totals, content-type breakdown, and the top-10 rankings.
    ///
    /// Rankings are computed over the full population and truncated last,
    /// so the top 10 is the true top 10 rather than a sample.
    pub async fn overview(&self) -> Result<DashboardOverview, ServiceError> {
        self.overview_at(Utc::now().timestamp()).await
    }

    pub(crate) async fn overview_at(&self, now: i64) -> Result<DashboardOverview, ServiceError> {
        let total_users = self.store.count_users().await?;
        let active_users_7d =
            self.store.count_users_active_since(now - 7 * SECONDS_PER_DAY).await?;
        let active_users_30d =
            self.store.count_users_active_since(now - 30 * SECONDS_PER_DAY).await?;

        let totals = self.global_totals().await?;

        let users = self.store.list_users(None).await?;
        let mut top_users = Vec::with_capacity(users.len());
        for user in &users {
            top_users.push(self.user_storage_stats(user).await?);
        }
        sort_users_by_storage(&mut top_users);
        top_users.truncate(TOP_RANKED);

        let groups = self.store.list_groups().await?;
        let mut top_groups = Vec::with_capacity(groups.len());
        for group in &groups {
            top_groups.push(self.group_activity_stats(group).await?);
        }
        sort_groups_by_activity(&mut top_groups);
        top_groups.truncate(TOP_RANKED);

        Ok(DashboardOverview {
            total_users,
            active_users_7d,
            active_users_30d,
            total_chats: totals.chats,
            total_files: totals.files,
            total_images: totals.images,
            total_knowledge: totals.knowledge,
            total_messages: totals.messages,
            total_storage_mb: round2(totals.estimate.total_mb()),
            content_type_breakdown: breakdown_rows(&totals),
            top_users_by_storage: top_users,
            top_groups_by_activity: top_groups,
        })
    }

    /// Per-user storage listing, sorted descending by rounded MB (stable:
    /// ties keep the store's fetch order). The cap is applied at the user
    /// fetch.
    pub async fn users_storage(
        &self,
        limit: Option<usize>,
    ) -> Result<Vec<UserStorageStats>, ServiceError> {
        let limit = limit.unwrap_or(DEFAULT_LISTING_LIMIT);
        let users = self.store.list_users(Some(limit)).await?;
        let mut stats = Vec::with_capacity(users.len());
        for user in &users {
            stats.push(self.user_storage_stats(user).await?);
        }
        sort_users_by_storage(&mut stats);
        Ok(stats)
    }

    /// Per-group activity listing, sorted descending by the activity sum.
    /// The cap is applied only after sorting.
    pub async fn groups_activity(
        &self,
        limit: Option<usize>,
    ) -> Result<Vec<GroupActivityStats>, ServiceError> {
        let limit = limit.unwrap_or(DEFAULT_LISTING_LIMIT);
        let groups = self.store.list_groups().await?;
        let mut stats = Vec::with_capacity(groups.len());
        for group in &groups {
            stats.push(self.group_activity_stats(group).await?);
        }
        sort_groups_by_activity(&mut stats);
        stats.truncate(limit);
        Ok(stats)
    }

    /// The five-category breakdown alone.
    pub async fn content_types(&self) -> Result<Vec<ContentTypeStats>, ServiceError> {
        Ok(breakdown_rows(&self.global_totals().await?))
    }

    /// One bucket per calendar day covering the requested window, oldest
    /// day first. Rejects unknown period keywords before any store access.
    pub async fn time_series(&self, period: &str) -> Result<Vec<TimeBucketStats>, ServiceError> {
        let period: Period = period.parse().map_err(ServiceError::InvalidInput)?;
        self.time_series_at(Utc::now().timestamp(), period).await
    }

    pub(crate) async fn time_series_at(
        &self,
        now: i64,
        period: Period,
    ) -> Result<Vec<TimeBucketStats>, ServiceError> {
        let days = period.days();
        let window_start = now - days * SECONDS_PER_DAY;

        // Buckets step forward from the anchor in fixed 24h increments; the
        // final bucket's end may lie in the future relative to `now`.
        let mut buckets = Vec::with_capacity(days as usize);
        for day in 0..days {
            let range = TimeRange::new(
                window_start + day * SECONDS_PER_DAY,
                window_start + (day + 1) * SECONDS_PER_DAY,
            );
            let chats = self.store.count_chats_created_in(range).await?;
            let files_total = self.store.count_files_created_in(range).await?;
            let files = self.store.list_files_created_in(range).await?;
            let images = count_images(&files);
            let knowledge = self.store.count_knowledge_bases_created_in(range).await?;
            // Message timestamps are nanoseconds; the window converts here.
            let messages = self.store.count_messages_created_in(range.as_nanos()).await?;

            let estimate = StorageEstimate::new(&files, chats, knowledge, messages);
            buckets.push(TimeBucketStats {
                period: day_label(range.start),
                chats_created: chats,
                files_uploaded: files_total,
                images_generated: images,
                knowledge_created: knowledge,
                messages_sent: messages,
                storage_used_mb: round2(estimate.total_mb()),
            });
        }

        tracing::debug!(days, period = period.as_str(), "computed time-series buckets");
        Ok(buckets)
    }

    async fn global_totals(&self) -> Result<GlobalTotals, ServiceError> {
        let chats = self.store.count_chats().await?;
        let files_total = self.store.count_files().await?;
        let knowledge = self.store.count_knowledge_bases().await?;
        let messages = self.store.count_messages().await?;

        let files = self.store.list_files().await?;
        let images = count_images(&files);
        let estimate = StorageEstimate::new(&files, chats, knowledge, messages);
        Ok(GlobalTotals { chats, files: files_total, images, knowledge, messages, estimate })
    }

    async fn owner_usage(&self, user_id: &str) -> Result<OwnerUsage, ServiceError> {
        let chats = self.store.count_chats_for_user(user_id).await?;
        let files_total = self.store.count_files_for_user(user_id).await?;
        let knowledge = self.store.count_knowledge_bases_for_user(user_id).await?;
        let messages = self.store.count_messages_for_user(user_id).await?;

        let files = self.store.list_files_for_user(user_id).await?;
        let images = count_images(&files);
        let estimate = StorageEstimate::new(&files, chats, knowledge, messages);
        Ok(OwnerUsage { chats, files: files_total, images, knowledge, messages, estimate })
    }

    async fn user_storage_stats(&self, user: &User) -> Result<UserStorageStats, ServiceError> {
        let usage = self.owner_usage(&user.id).await?;
        Ok(UserStorageStats {
            user_id: user.id.clone(),
            user_name: user.name.clone(),
            user_email: user.email.clone(),
            total_chats: usage.chats,
            total_files: usage.files,
            total_images: usage.images,
            total_knowledge: usage.knowledge,
            total_messages: usage.messages,
            storage_usage_mb: round2(usage.estimate.total_mb()),
            last_active: user.last_active_at,
        })
    }

    /// Sums member usage with no deduplication across groups: a user who
    /// belongs to several groups is counted fully in each.
    async fn group_activity_stats(
        &self,
        group: &Group,
    ) -> Result<GroupActivityStats, ServiceError> {
        let mut chats = 0;
        let mut files = 0;
        let mut images = 0;
        let mut knowledge = 0;
        let mut messages = 0;
        let mut storage_mb = 0.0;

        for user_id in &group.user_ids {
            let usage = self.owner_usage(user_id).await?;
            chats += usage.chats;
            files += usage.files;
            images += usage.images;
            knowledge += usage.knowledge;
            messages += usage.messages;
            // Accumulate unrounded; rounding happens once below.
            storage_mb += usage.estimate.total_mb();
        }

        Ok(GroupActivityStats {
            group_id: group.id.clone(),
            group_name: group.name.clone(),
            member_count: group.user_ids.len() as u64,
            total_chats: chats,
            total_files: files,
            total_images: images,
            total_knowledge: knowledge,
            total_messages: messages,
            storage_usage_mb: round2(storage_mb),
        })
    }
}

fn breakdown_rows(totals: &GlobalTotals) -> Vec<ContentTypeStats> {
    let rows = [
        (ContentCategory::Chats, totals.chats, totals.estimate.chats_mb()),
        (ContentCategory::Files, totals.files, totals.estimate.files_mb),
        (ContentCategory::Images, totals.images, totals.estimate.images_mb()),
        (ContentCategory::Knowledge, totals.knowledge, totals.estimate.knowledge_mb()),
        (ContentCategory::Messages, totals.messages, totals.estimate.messages_mb()),
    ];
    let total_count: u64 = rows.iter().map(|(_, count, _)| count).sum();

    rows.into_iter()
        .map(|(content_type, count, mb)| ContentTypeStats {
            content_type,
            count,
            percentage: if total_count > 0 {
                round2(count as f64 / total_count as f64 * 100.0)
            } else {
                0.0
            },
            total_size_mb: round2(mb),
        })
        .collect()
}

/// Stable descending sort on the presented (rounded) storage figure; ties
/// keep fetch order.
fn sort_users_by_storage(stats: &mut [UserStorageStats]) {
    stats.sort_by(|a, b| {
        b.storage_usage_mb.partial_cmp(&a.storage_usage_mb).unwrap_or(Ordering::Equal)
    });
}

/// Stable descending sort on chats + files + images + knowledge.
fn sort_groups_by_activity(stats: &mut [GroupActivityStats]) {
    stats.sort_by(|a, b| b.activity().cmp(&a.activity()));
}

fn day_label(start_secs: i64) -> String {
    DateTime::<Utc>::from_timestamp(start_secs, 0)
        .map_or_else(|| start_secs.to_string(), |dt| dt.format("%Y-%m-%d").to_string())
}
