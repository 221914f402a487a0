//! ChatStore implementation for PgStore.

use async_trait::async_trait;
use hubstats_core::Chat;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::error::StoreError;
use crate::traits::ChatStore;
use crate::types::TimeRange;

use super::{PgStore, count_from};

fn row_to_chat(row: &PgRow) -> Result<Chat, StoreError> {
    Ok(Chat {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        created_at: row.try_get("created_at")?,
    })
}

#[async_trait]
impl ChatStore for PgStore {
    async fn count_chats(&self) -> Result<u64, StoreError> {
        let n: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM chats").fetch_one(&self.pool).await?;
        Ok(count_from(n))
    }

    async fn list_chats(&self) -> Result<Vec<Chat>, StoreError> {
        let rows = sqlx::query("SELECT id, user_id, created_at FROM chats ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_chat).collect()
    }

    async fn count_chats_for_user(&self, user_id: &str) -> Result<u64, StoreError> {
        let n: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM chats WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count_from(n))
    }

    async fn list_chats_for_user(&self, user_id: &str) -> Result<Vec<Chat>, StoreError> {
        let rows =
            sqlx::query("SELECT id, user_id, created_at FROM chats WHERE user_id = $1 ORDER BY id")
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?;
        rows.iter().map(row_to_chat).collect()
    }

    async fn count_chats_created_in(&self, range: TimeRange) -> Result<u64, StoreError> {
        let n: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM chats WHERE created_at >= $1 AND created_at < $2",
        )
        .bind(range.start)
        .bind(range.end)
        .fetch_one(&self.pool)
        .await?;
        Ok(count_from(n))
    }

    async fn list_chats_created_in(&self, range: TimeRange) -> Result<Vec<Chat>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, user_id, created_at FROM chats
               WHERE created_at >= $1 AND created_at < $2 ORDER BY id",
        )
        .bind(range.start)
        .bind(range.end)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_chat).collect()
    }
}
