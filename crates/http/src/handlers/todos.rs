use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::IntoResponse,
};

use tasklist_core::{Page, TODOS_API_PATH, TodoInput, TodoItem};

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::ListQuery;

pub async fn list_todos(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Page<TodoItem>>, ApiError> {
    let Query(query) = query?;
    let page = state.todo_service.list(query.page_request()).await?;
    Ok(Json(page))
}

pub async fn create_todo(
    State(state): State<Arc<AppState>>,
    input: Result<Json<TodoInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(input) = input?;
    let item = state.todo_service.create(input).await?;
    let location = format!("{TODOS_API_PATH}/{}", item.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(item)))
}

pub async fn get_todo(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<TodoItem>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.todo_service.get(id).await?))
}

pub async fn update_todo(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
    input: Result<Json<TodoInput>, JsonRejection>,
) -> Result<Json<TodoItem>, ApiError> {
    let (Path(id), Json(input)) = (id?, input?);
    Ok(Json(state.todo_service.update(id, input).await?))
}

pub async fn delete_todo(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.todo_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
