//! Unified storage backend with enum dispatch.

use async_trait::async_trait;
use tasklist_core::{NewTodo, TodoItem};

use crate::error::StorageError;
use crate::memory::MemoryStorage;
use crate::traits::TodoStore;

macro_rules! dispatch {
    ($self:expr, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            #[cfg(feature = "postgres")]
            StorageBackend::Postgres(s) => <crate::pg_storage::PgStorage as TodoStore>::$method(s, $($arg),*).await,
            StorageBackend::Memory(s) => <MemoryStorage as TodoStore>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    #[cfg(feature = "postgres")]
    Postgres(crate::pg_storage::PgStorage),
    Memory(MemoryStorage),
}

impl StorageBackend {
    #[cfg(feature = "postgres")]
    pub async fn new_postgres(
        database_url: &str,
        config: crate::pg_storage::PgPoolConfig,
    ) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::pg_storage::PgStorage::with_config(database_url, config).await?))
    }

    #[must_use]
    pub fn new_memory() -> Self {
        Self::Memory(MemoryStorage::new())
    }

    /// Short backend name for startup logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            #[cfg(feature = "postgres")]
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }
}

#[async_trait]
impl TodoStore for StorageBackend {
    async fn count_todos(&self) -> Result<u64, StorageError> {
        dispatch!(self, count_todos())
    }

    async fn list_todos(&self, offset: u64, limit: u64) -> Result<Vec<TodoItem>, StorageError> {
        dispatch!(self, list_todos(offset, limit))
    }

    async fn insert_todo(&self, todo: &NewTodo) -> Result<TodoItem, StorageError> {
        dispatch!(self, insert_todo(todo))
    }

    async fn get_todo(&self, id: i64) -> Result<Option<TodoItem>, StorageError> {
        dispatch!(self, get_todo(id))
    }

    async fn update_todo(&self, todo: &TodoItem) -> Result<bool, StorageError> {
        dispatch!(self, update_todo(todo))
    }

    async fn delete_todo(&self, id: i64) -> Result<bool, StorageError> {
        dispatch!(self, delete_todo(id))
    }
}
