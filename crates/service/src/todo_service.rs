use std::sync::Arc;

use tasklist_core::{NewTodo, Page, PageRequest, TodoInput, TodoItem};
use tasklist_storage::{StorageBackend, StorageError, TodoStore};

use crate::error::ServiceError;

/// CRUD and pagination over a [`TodoStore`].
///
/// Stateless: every call reads or writes the store directly, so one instance
/// is shared by all request handlers.
pub struct TodoService<S = StorageBackend> {
    storage: Arc<S>,
}

impl<S: TodoStore> TodoService<S> {
    #[must_use]
    pub const fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// One page of items, newest first.
    ///
    /// Issues one count and one range query. A page past the end yields an
    /// empty `items` list with the real totals.
    pub async fn list(&self, request: PageRequest) -> Result<Page<TodoItem>, ServiceError> {
        if !request.is_valid() {
            return Err(ServiceError::InvalidInput(format!(
                "page and pageSize must be at least 1 (got page={}, pageSize={})",
                request.page, request.page_size
            )));
        }
        let total_count = self.storage.count_todos().await?;
        let items = self.storage.list_todos(request.offset(), request.limit()).await?;
        tracing::debug!(
            page = request.page,
            page_size = request.page_size,
            total_count,
            returned = items.len(),
            "listed todos"
        );
        Ok(Page::new(items, total_count, request))
    }

    /// Insert a new item; the store assigns its id. Any `id` in the input is ignored.
    pub async fn create(&self, input: TodoInput) -> Result<TodoItem, ServiceError> {
        let item = self.storage.insert_todo(&NewTodo::from(input)).await?;
        tracing::debug!(id = item.id, "created todo");
        Ok(item)
    }

    pub async fn get(&self, id: i64) -> Result<TodoItem, ServiceError> {
        self.storage.get_todo(id).await?.ok_or_else(|| StorageError::todo_not_found(id).into())
    }

    /// Persist the completion flag from `input` onto item `id`.
    ///
    /// `input.title` is accepted but not written. The id check runs before any
    /// store access, so a mismatch never mutates anything.
    pub async fn update(&self, id: i64, input: TodoInput) -> Result<TodoItem, ServiceError> {
        if !input.targets(id) {
            return Err(ServiceError::InvalidInput(match input.id {
                Some(body_id) => format!("path id {id} does not match body id {body_id}"),
                None => format!("body id missing for path id {id}"),
            }));
        }
        let mut item = self.get(id).await?;
        item.is_completed = input.is_completed;
        if !self.storage.update_todo(&item).await? {
            // Deleted between the lookup and the write.
            return Err(StorageError::todo_not_found(id).into());
        }
        tracing::debug!(id, is_completed = item.is_completed, "updated todo");
        Ok(item)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.storage.delete_todo(id).await? {
            return Err(StorageError::todo_not_found(id).into());
        }
        tracing::debug!(id, "deleted todo");
        Ok(())
    }
}
