//! In-process todo store.
//!
//! Backs the server when no `DATABASE_URL` is configured and every
//! service/HTTP test. Ids come from a counter that is never rewound, so a
//! deleted id is never handed out again.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tasklist_core::{NewTodo, TodoItem};
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::traits::TodoStore;

#[derive(Debug, Default)]
struct MemoryTable {
    rows: BTreeMap<i64, TodoItem>,
    last_id: i64,
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    table: Arc<RwLock<MemoryTable>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn to_usize(val: u64) -> usize {
    usize::try_from(val).unwrap_or(usize::MAX)
}

#[async_trait]
impl TodoStore for MemoryStorage {
    async fn count_todos(&self) -> Result<u64, StorageError> {
        let table = self.table.read().await;
        Ok(table.rows.len() as u64)
    }

    async fn list_todos(&self, offset: u64, limit: u64) -> Result<Vec<TodoItem>, StorageError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .rev()
            .skip(to_usize(offset))
            .take(to_usize(limit))
            .cloned()
            .collect())
    }

    async fn insert_todo(&self, todo: &NewTodo) -> Result<TodoItem, StorageError> {
        let mut table = self.table.write().await;
        let id = table.last_id.checked_add(1).ok_or_else(|| StorageError::DataCorruption {
            context: "todo id sequence exhausted".to_owned(),
            source: "i64 overflow".into(),
        })?;
        table.last_id = id;
        let item = TodoItem { id, title: todo.title.clone(), is_completed: todo.is_completed };
        table.rows.insert(id, item.clone());
        Ok(item)
    }

    async fn get_todo(&self, id: i64) -> Result<Option<TodoItem>, StorageError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn update_todo(&self, todo: &TodoItem) -> Result<bool, StorageError> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&todo.id) {
            Some(row) => {
                row.clone_from(todo);
                Ok(true)
            },
            None => Ok(false),
        }
    }

    async fn delete_todo(&self, id: i64) -> Result<bool, StorageError> {
        let mut table = self.table.write().await;
        Ok(table.rows.remove(&id).is_some())
    }
}
