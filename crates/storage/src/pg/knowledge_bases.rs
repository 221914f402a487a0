//! KnowledgeBaseStore implementation for PgStore.

use async_trait::async_trait;
use hubstats_core::KnowledgeBase;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::error::StoreError;
use crate::traits::KnowledgeBaseStore;
use crate::types::TimeRange;

use super::{PgStore, count_from};

fn row_to_knowledge_base(row: &PgRow) -> Result<KnowledgeBase, StoreError> {
    Ok(KnowledgeBase {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        created_at: row.try_get("created_at")?,
    })
}

#[async_trait]
impl KnowledgeBaseStore for PgStore {
    async fn count_knowledge_bases(&self) -> Result<u64, StoreError> {
        let n: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM knowledge_bases")
            .fetch_one(&self.pool)
            .await?;
        Ok(count_from(n))
    }

    async fn list_knowledge_bases(&self) -> Result<Vec<KnowledgeBase>, StoreError> {
        let rows = sqlx::query("SELECT id, user_id, created_at FROM knowledge_bases ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_knowledge_base).collect()
    }

    async fn count_knowledge_bases_for_user(&self, user_id: &str) -> Result<u64, StoreError> {
        let n: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM knowledge_bases WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count_from(n))
    }

    async fn list_knowledge_bases_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<KnowledgeBase>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, user_id, created_at FROM knowledge_bases WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_knowledge_base).collect()
    }

    async fn count_knowledge_bases_created_in(&self, range: TimeRange) -> Result<u64, StoreError> {
        let n: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM knowledge_bases WHERE created_at >= $1 AND created_at < $2",
        )
        .bind(range.start)
        .bind(range.end)
        .fetch_one(&self.pool)
        .await?;
        Ok(count_from(n))
    }

    async fn list_knowledge_bases_created_in(
        &self,
        range: TimeRange,
    ) -> Result<Vec<KnowledgeBase>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, user_id, created_at FROM knowledge_bases
               WHERE created_at >= $1 AND created_at < $2 ORDER BY id",
        )
        .bind(range.start)
        .bind(range.end)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_knowledge_base).collect()
    }
}
