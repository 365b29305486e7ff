//! PostgreSQL schema migrations for tasklist storage.

use anyhow::Result;
use sqlx::PgPool;

/// Run all PostgreSQL migrations. Idempotent; executed on every startup.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<()> {
    // Identity columns never hand out a value twice, even after deletes.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS todo_items (
            id BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
            title TEXT NOT NULL,
            is_completed BOOLEAN NOT NULL DEFAULT FALSE
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::debug!("todo_items schema is up to date");
    Ok(())
}
