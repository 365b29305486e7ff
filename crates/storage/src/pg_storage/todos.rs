//! TodoStore implementation for PgStorage.

use async_trait::async_trait;
use tasklist_core::{NewTodo, TodoItem};

use super::{PgStorage, TODO_COLUMNS, u64_to_i64};
use crate::error::StorageError;
use crate::traits::TodoStore;

#[async_trait]
impl TodoStore for PgStorage {
    async fn count_todos(&self) -> Result<u64, StorageError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM todo_items")
            .fetch_one(&self.pool)
            .await?;
        u64::try_from(count).map_err(|e| StorageError::DataCorruption {
            context: format!("negative row count {count}"),
            source: Box::new(e),
        })
    }

    async fn list_todos(&self, offset: u64, limit: u64) -> Result<Vec<TodoItem>, StorageError> {
        let rows = sqlx::query_as::<_, TodoItem>(&format!(
            "SELECT {TODO_COLUMNS} FROM todo_items ORDER BY id DESC LIMIT $1 OFFSET $2"
        ))
        .bind(u64_to_i64(limit))
        .bind(u64_to_i64(offset))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn insert_todo(&self, todo: &NewTodo) -> Result<TodoItem, StorageError> {
        let item = sqlx::query_as::<_, TodoItem>(&format!(
            "INSERT INTO todo_items (title, is_completed) VALUES ($1, $2) RETURNING {TODO_COLUMNS}"
        ))
        .bind(&todo.title)
        .bind(todo.is_completed)
        .fetch_one(&self.pool)
        .await?;
        Ok(item)
    }

    async fn get_todo(&self, id: i64) -> Result<Option<TodoItem>, StorageError> {
        let item = sqlx::query_as::<_, TodoItem>(&format!(
            "SELECT {TODO_COLUMNS} FROM todo_items WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(item)
    }

    async fn update_todo(&self, todo: &TodoItem) -> Result<bool, StorageError> {
        let result =
            sqlx::query("UPDATE todo_items SET title = $1, is_completed = $2 WHERE id = $3")
                .bind(&todo.title)
                .bind(todo.is_completed)
                .bind(todo.id)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_todo(&self, id: i64) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM todo_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
