//! PostgreSQL storage backend using sqlx.

mod todos;

use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tasklist_core::{
    PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
    env_parse_with_default,
};

use crate::error::StorageError;

use super::pg_migrations::run_pg_migrations;

/// Connection pool sizing. Pool plumbing only; requests themselves carry no timeout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PgPoolConfig {
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
}

impl Default for PgPoolConfig {
    fn default() -> Self {
        Self {
            max_connections: PG_POOL_MAX_CONNECTIONS,
            acquire_timeout_secs: PG_POOL_ACQUIRE_TIMEOUT_SECS,
            idle_timeout_secs: PG_POOL_IDLE_TIMEOUT_SECS,
        }
    }
}

impl PgPoolConfig {
    /// Read `TASKLIST_PG_*` overrides, keeping defaults for unset or invalid values.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            max_connections: env_parse_with_default(
                "TASKLIST_PG_MAX_CONNECTIONS",
                PG_POOL_MAX_CONNECTIONS,
            ),
            acquire_timeout_secs: env_parse_with_default(
                "TASKLIST_PG_ACQUIRE_TIMEOUT_SECS",
                PG_POOL_ACQUIRE_TIMEOUT_SECS,
            ),
            idle_timeout_secs: env_parse_with_default(
                "TASKLIST_PG_IDLE_TIMEOUT_SECS",
                PG_POOL_IDLE_TIMEOUT_SECS,
            ),
        }
    }
}

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        Self::with_config(database_url, PgPoolConfig::default()).await
    }

    pub async fn with_config(
        database_url: &str,
        config: PgPoolConfig,
    ) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!(max_connections = config.max_connections, "PgStorage initialized");
        Ok(Self { pool })
    }
}

/// Convert `u64` to `i64` for SQL LIMIT/OFFSET binds.
/// Saturates to `i64::MAX`; PostgreSQL treats that as "no limit" in practice.
pub(crate) fn u64_to_i64(val: u64) -> i64 {
    i64::try_from(val).unwrap_or(i64::MAX)
}

pub(crate) const TODO_COLUMNS: &str = "id, title, is_completed";
