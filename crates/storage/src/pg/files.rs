//! FileStore implementation for PgStore.

use async_trait::async_trait;
use hubstats_core::FileEntry;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::error::StoreError;
use crate::traits::FileStore;
use crate::types::TimeRange;

use super::{PgStore, count_from};

fn row_to_file(row: &PgRow) -> Result<FileEntry, StoreError> {
    Ok(FileEntry {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        meta: row.try_get::<Option<serde_json::Value>, _>("meta")?,
        created_at: row.try_get("created_at")?,
    })
}

#[async_trait]
impl FileStore for PgStore {
    async fn count_files(&self) -> Result<u64, StoreError> {
        let n: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM files").fetch_one(&self.pool).await?;
        Ok(count_from(n))
    }

    async fn list_files(&self) -> Result<Vec<FileEntry>, StoreError> {
        let rows = sqlx::query("SELECT id, user_id, meta, created_at FROM files ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_file).collect()
    }

    async fn count_files_for_user(&self, user_id: &str) -> Result<u64, StoreError> {
        let n: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM files WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count_from(n))
    }

    async fn list_files_for_user(&self, user_id: &str) -> Result<Vec<FileEntry>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, user_id, meta, created_at FROM files WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_file).collect()
    }

    async fn count_files_created_in(&self, range: TimeRange) -> Result<u64, StoreError> {
        let n: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM files WHERE created_at >= $1 AND created_at < $2",
        )
        .bind(range.start)
        .bind(range.end)
        .fetch_one(&self.pool)
        .await?;
        Ok(count_from(n))
    }

    async fn list_files_created_in(&self, range: TimeRange) -> Result<Vec<FileEntry>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, user_id, meta, created_at FROM files
               WHERE created_at >= $1 AND created_at < $2 ORDER BY id",
        )
        .bind(range.start)
        .bind(range.end)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_file).collect()
    }
}
