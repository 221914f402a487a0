//! PostgreSQL schema migrations for the hubstats store.
//!
//! The production content hub owns these tables; when hubstats runs
//! standalone the same schema is created here so the service works against
//! an empty database. Timestamps are epoch integers — seconds everywhere
//! except `messages.created_at`, which is nanoseconds.

use sqlx::PgPool;

use crate::error::StoreError;

/// Create the analytics schema. Idempotent.
pub async fn run_migrations(pool: &PgPool) -> Result<(), StoreError> {
    exec(
        pool,
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            last_active_at BIGINT NOT NULL DEFAULT 0
        )
        "#,
    )
    .await?;

    exec(
        pool,
        r#"
        CREATE TABLE IF NOT EXISTS groups (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            user_ids JSONB NOT NULL DEFAULT '[]'
        )
        "#,
    )
    .await?;

    exec(
        pool,
        r#"
        CREATE TABLE IF NOT EXISTS chats (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            created_at BIGINT NOT NULL
        )
        "#,
    )
    .await?;

    exec(
        pool,
        r#"
        CREATE TABLE IF NOT EXISTS files (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            meta JSONB,
            created_at BIGINT NOT NULL
        )
        "#,
    )
    .await?;

    exec(
        pool,
        r#"
        CREATE TABLE IF NOT EXISTS knowledge_bases (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            created_at BIGINT NOT NULL
        )
        "#,
    )
    .await?;

    exec(
        pool,
        r#"
        CREATE TABLE IF NOT EXISTS messages (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            created_at BIGINT NOT NULL
        )
        "#,
    )
    .await?;

    exec(pool, "CREATE INDEX IF NOT EXISTS idx_users_last_active ON users (last_active_at)")
        .await?;

    for table in ["chats", "files", "knowledge_bases", "messages"] {
        exec(pool, &format!("CREATE INDEX IF NOT EXISTS idx_{table}_user ON {table} (user_id)"))
            .await?;
        exec(
            pool,
            &format!("CREATE INDEX IF NOT EXISTS idx_{table}_created ON {table} (created_at)"),
        )
        .await?;
    }

    tracing::info!("hubstats schema ready");
    Ok(())
}

async fn exec(pool: &PgPool, sql: &str) -> Result<(), StoreError> {
    sqlx::query(sql)
        .execute(pool)
        .await
        .map_err(|e| StoreError::Migration(e.to_string()))
        .map(|_| ())
}
