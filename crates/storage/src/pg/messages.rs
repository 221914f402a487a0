//! MessageStore implementation for PgStore.
//!
//! Message `created_at` is stored in epoch nanoseconds; window queries
//! expect bounds already converted by the caller.

use async_trait::async_trait;
use hubstats_core::Message;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::error::StoreError;
use crate::traits::MessageStore;
use crate::types::TimeRange;

use super::{PgStore, count_from};

fn row_to_message(row: &PgRow) -> Result<Message, StoreError> {
    Ok(Message {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        created_at: row.try_get("created_at")?,
    })
}

#[async_trait]
impl MessageStore for PgStore {
    async fn count_messages(&self) -> Result<u64, StoreError> {
        let n: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM messages").fetch_one(&self.pool).await?;
        Ok(count_from(n))
    }

    async fn list_messages(&self) -> Result<Vec<Message>, StoreError> {
        let rows = sqlx::query("SELECT id, user_id, created_at FROM messages ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_message).collect()
    }

    async fn count_messages_for_user(&self, user_id: &str) -> Result<u64, StoreError> {
        let n: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM messages WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count_from(n))
    }

    async fn list_messages_for_user(&self, user_id: &str) -> Result<Vec<Message>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, user_id, created_at FROM messages WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_message).collect()
    }

    async fn count_messages_created_in(&self, range: TimeRange) -> Result<u64, StoreError> {
        let n: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM messages WHERE created_at >= $1 AND created_at < $2",
        )
        .bind(range.start)
        .bind(range.end)
        .fetch_one(&self.pool)
        .await?;
        Ok(count_from(n))
    }

    async fn list_messages_created_in(&self, range: TimeRange) -> Result<Vec<Message>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, user_id, created_at FROM messages
               WHERE created_at >= $1 AND created_at < $2 ORDER BY id",
        )
        .bind(range.start)
        .bind(range.end)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_message).collect()
    }
}
