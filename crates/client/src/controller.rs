use tasklist_core::{TodoInput, TodoItem, total_pages};

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::state::ClientState;
use crate::view::View;

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this task?";

/// Drives list/add/toggle/delete against the API.
///
/// Every operation takes the pagination state and the view explicitly. One
/// request is in flight per call; nothing is cancelled or de-duplicated, so
/// overlapping calls from different tasks may render out of order.
#[derive(Clone, Debug)]
pub struct TodoController {
    api: ApiClient,
}

impl TodoController {
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    #[must_use]
    pub const fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Fetch the current page and re-render list and pagination.
    ///
    /// On failure an inline error row replaces the list and the pagination
    /// controls keep their previous state.
    pub async fn load<V: View>(
        &self,
        state: &mut ClientState,
        view: &mut V,
    ) -> Result<(), ClientError> {
        match self.api.list(state.current_page, state.page_size).await {
            Ok(page) => {
                view.render_items(&page.items);
                state.total_pages = total_pages(page.total_count, state.page_size);
                view.render_pagination(&state.controls());
                Ok(())
            },
            Err(e) => {
                tracing::warn!(error = %e, page = state.current_page, "error loading todos");
                view.render_error(&format!("Error loading todos: {e}"));
                Err(e)
            },
        }
    }

    /// Create a task and jump back to the first page, where it shows up first.
    ///
    /// Returns `Ok(None)` without sending anything when the title is blank.
    pub async fn add<V: View>(
        &self,
        state: &mut ClientState,
        view: &mut V,
        title: &str,
    ) -> Result<Option<TodoItem>, ClientError> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(None);
        }
        let created = match self.api.create(&TodoInput::new(title, false)).await {
            Ok(item) => item,
            Err(e) => {
                tracing::warn!(error = %e, "error adding todo");
                view.alert(&format!("Failed to add task: {e}"));
                return Err(e);
            },
        };
        view.clear_input();
        state.current_page = 1;
        self.reload(state, view).await;
        Ok(Some(created))
    }

    /// Flip the completion flag of a displayed row.
    ///
    /// On success only that row is patched; the server's returned item is not
    /// re-read. A transport failure triggers a full reload to resynchronize,
    /// any other failure raises an alert and leaves the row as it was.
    pub async fn toggle<V: View>(
        &self,
        state: &mut ClientState,
        view: &mut V,
        displayed: &TodoItem,
    ) -> Result<bool, ClientError> {
        let is_completed = !displayed.is_completed;
        let input = TodoInput::for_update(displayed.id, displayed.title.as_str(), is_completed);
        match self.api.update(displayed.id, &input).await {
            Ok(()) => {
                view.mark_completed(displayed.id, is_completed);
                Ok(is_completed)
            },
            Err(e) if e.is_transport() => {
                tracing::warn!(error = %e, id = displayed.id, "toggle error, reloading");
                self.reload(state, view).await;
                Err(e)
            },
            Err(e) => {
                tracing::warn!(error = %e, id = displayed.id, "toggle rejected");
                view.alert(&format!("Failed to update task: {e}"));
                Err(e)
            },
        }
    }

    /// Delete after confirmation, then reload the current page whatever the
    /// server answered. Returns `Ok(false)` when the user declines.
    ///
    /// The current page is kept even if the delete emptied it.
    pub async fn delete<V: View>(
        &self,
        state: &mut ClientState,
        view: &mut V,
        id: i64,
    ) -> Result<bool, ClientError> {
        if !view.confirm(DELETE_CONFIRMATION) {
            return Ok(false);
        }
        let result = self.api.delete(id).await;
        match result {
            Err(e) if e.is_transport() => {
                tracing::warn!(error = %e, id, "error deleting todo");
                Err(e)
            },
            other => {
                self.reload(state, view).await;
                other.map(|()| true)
            },
        }
    }

    pub async fn change_page_size<V: View>(
        &self,
        state: &mut ClientState,
        view: &mut V,
        page_size: u32,
    ) -> Result<(), ClientError> {
        state.page_size = page_size.max(1);
        state.current_page = 1;
        self.load(state, view).await
    }

    /// Go back one page. Returns `Ok(false)` without a request on page 1.
    pub async fn prev_page<V: View>(
        &self,
        state: &mut ClientState,
        view: &mut V,
    ) -> Result<bool, ClientError> {
        if !state.has_prev() {
            return Ok(false);
        }
        state.current_page -= 1;
        self.load(state, view).await.map(|()| true)
    }

    /// Go forward one page. Returns `Ok(false)` without a request on the last page.
    pub async fn next_page<V: View>(
        &self,
        state: &mut ClientState,
        view: &mut V,
    ) -> Result<bool, ClientError> {
        let next = match state.current_page.checked_add(1) {
            Some(next) if state.has_next() => next,
            _ => return Ok(false),
        };
        state.current_page = next;
        self.load(state, view).await.map(|()| true)
    }

    /// Load whose failure is already shown by the view.
    async fn reload<V: View>(&self, state: &mut ClientState, view: &mut V) {
        if let Err(e) = self.load(state, view).await {
            tracing::debug!(error = %e, "reload failed");
        }
    }
}
