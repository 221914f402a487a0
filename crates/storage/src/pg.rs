//! PostgreSQL storage backend using sqlx.

mod chats;
mod files;
mod groups;
mod knowledge_bases;
mod messages;
mod users;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::error::StoreError;
use crate::migrations::run_migrations;

/// Analytics collector backed by a PostgreSQL pool.
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect to the database and ensure the schema exists.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new().max_connections(8).connect(database_url).await?;
        run_migrations(&pool).await?;
        tracing::info!("PgStore initialized");
        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn count_from(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

fn limit_to_i64(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}
