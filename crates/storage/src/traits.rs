//! Storage backend trait abstraction
//!
//! `TodoStore` is the only seam between the service layer and persistence;
//! the service never sees SQL, and tests substitute the in-memory backend.

use async_trait::async_trait;
use tasklist_core::{NewTodo, TodoItem};

use crate::error::StorageError;

/// Operations on the todo table. Each call is atomic on its own; no
/// cross-call transaction is offered.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Number of rows in the table.
    async fn count_todos(&self) -> Result<u64, StorageError>;

    /// Up to `limit` rows after skipping `offset`, ordered by id descending.
    async fn list_todos(&self, offset: u64, limit: u64) -> Result<Vec<TodoItem>, StorageError>;

    /// Insert a row. The store assigns the id.
    async fn insert_todo(&self, todo: &NewTodo) -> Result<TodoItem, StorageError>;

    /// Get row by id.
    async fn get_todo(&self, id: i64) -> Result<Option<TodoItem>, StorageError>;

    /// Overwrite the row with `todo.id`. Returns `false` if no such row exists.
    async fn update_todo(&self, todo: &TodoItem) -> Result<bool, StorageError>;

    /// Delete row. Returns `true` if a row was deleted.
    async fn delete_todo(&self, id: i64) -> Result<bool, StorageError>;
}
