//! UserStore implementation for PgStore.

use async_trait::async_trait;
use hubstats_core::User;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::error::StoreError;
use crate::traits::UserStore;

use super::{PgStore, count_from, limit_to_i64};

fn row_to_user(row: &PgRow) -> Result<User, StoreError> {
    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        last_active_at: row.try_get("last_active_at")?,
    })
}

#[async_trait]
impl UserStore for PgStore {
    async fn count_users(&self) -> Result<u64, StoreError> {
        let n: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM users").fetch_one(&self.pool).await?;
        Ok(count_from(n))
    }

    async fn count_users_active_since(&self, since: i64) -> Result<u64, StoreError> {
        let n: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE last_active_at >= $1")
            .bind(since)
            .fetch_one(&self.pool)
            .await?;
        Ok(count_from(n))
    }

    async fn list_users(&self, limit: Option<usize>) -> Result<Vec<User>, StoreError> {
        let rows = match limit {
            Some(n) => {
                sqlx::query("SELECT id, name, email, last_active_at FROM users ORDER BY id LIMIT $1")
                    .bind(limit_to_i64(n))
                    .fetch_all(&self.pool)
                    .await?
            },
            None => {
                sqlx::query("SELECT id, name, email, last_active_at FROM users ORDER BY id")
                    .fetch_all(&self.pool)
                    .await?
            },
        };
        rows.iter().map(row_to_user).collect()
    }
}
