use serde::{Deserialize, Serialize};

/// A persisted todo record.
///
/// `id` is assigned by the store on insert and never changes or gets reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-types", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: i64,
    pub title: String,
    pub is_completed: bool,
}

/// Request body accepted by create and update.
///
/// On create `id` is ignored. On update it must equal the id in the path;
/// a missing `id` never matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub is_completed: bool,
}

impl TodoInput {
    /// Body for a create request.
    #[must_use]
    pub fn new(title: impl Into<String>, is_completed: bool) -> Self {
        Self { id: None, title: title.into(), is_completed }
    }

    /// Body for an update request targeting `id`.
    #[must_use]
    pub fn for_update(id: i64, title: impl Into<String>, is_completed: bool) -> Self {
        Self { id: Some(id), title: title.into(), is_completed }
    }

    /// Whether the body id matches the id taken from the request path.
    #[must_use]
    pub fn targets(&self, path_id: i64) -> bool {
        self.id == Some(path_id)
    }
}

/// Fields the store needs to insert a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub is_completed: bool,
}

impl From<TodoInput> for NewTodo {
    fn from(input: TodoInput) -> Self {
        Self { title: input.title, is_completed: input.is_completed }
    }
}
