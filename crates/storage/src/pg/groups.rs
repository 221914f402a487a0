//! GroupStore implementation for PgStore.

use async_trait::async_trait;
use hubstats_core::Group;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::error::StoreError;
use crate::traits::GroupStore;

use super::PgStore;

fn row_to_group(row: &PgRow) -> Result<Group, StoreError> {
    let user_ids: serde_json::Value = row.try_get("user_ids")?;
    Ok(Group {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        // Malformed membership arrays degrade to an empty group rather than
        // failing the whole listing.
        user_ids: serde_json::from_value(user_ids).unwrap_or_default(),
    })
}

#[async_trait]
impl GroupStore for PgStore {
    async fn list_groups(&self) -> Result<Vec<Group>, StoreError> {
        let rows = sqlx::query("SELECT id, name, user_ids FROM groups ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_group).collect()
    }
}
