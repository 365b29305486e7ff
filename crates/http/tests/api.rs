use std::sync::Arc;

use axum::Router;
use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tasklist_core::{Page, TodoInput, TodoItem};
use tasklist_http::{AppState, create_router};
use tasklist_service::TodoService;
use tasklist_storage::StorageBackend;
use tower::ServiceExt;

fn app() -> Router {
    let service = Arc::new(TodoService::new(Arc::new(StorageBackend::new_memory())));
    create_router(Arc::new(AppState::new(service)))
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn delete(uri: &str) -> Request<String> {
    Request::builder().method("DELETE").uri(uri).body(String::new()).unwrap()
}

async fn create(app: &Router, title: &str) -> TodoItem {
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/todos", &json!({"title": title, "isCompleted": false})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp).await
}

// --- list ---

#[tokio::test]
async fn list_empty_uses_defaults() {
    let resp = app().oneshot(get("/api/todos")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(
        body,
        json!({"items": [], "totalCount": 0, "pageNumber": 1, "pageSize": 10, "totalPages": 0})
    );
}

#[tokio::test]
async fn list_second_page_of_fifteen() {
    let app = app();
    for i in 0..15 {
        create(&app, &format!("task {i}")).await;
    }
    let resp = app.oneshot(get("/api/todos?page=2&pageSize=10")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let page: Page<TodoItem> = body_json(resp).await;
    assert_eq!(page.items.len(), 5);
    assert_eq!(page.total_count, 15);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.page_number, 2);
    assert_eq!(page.items.first().map(|t| t.title.as_str()), Some("task 4"));
}

#[tokio::test]
async fn list_beyond_last_page_is_empty() {
    let app = app();
    create(&app, "only").await;
    let resp = app.oneshot(get("/api/todos?page=5")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let page: Page<TodoItem> = body_json(resp).await;
    assert!(page.items.is_empty());
    assert_eq!(page.total_count, 1);
}

#[tokio::test]
async fn list_zero_page_size_is_bad_request() {
    let resp = app().oneshot(get("/api/todos?pageSize=0")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("pageSize"));
}

#[tokio::test]
async fn list_non_numeric_page_is_bad_request() {
    let resp = app().oneshot(get("/api/todos?page=two")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_large_page_size_reaches_every_item() {
    let service = Arc::new(TodoService::new(Arc::new(StorageBackend::new_memory())));
    for i in 0..2500 {
        service.create(TodoInput::new(format!("task {i}"), false)).await.unwrap();
    }
    let app = create_router(Arc::new(AppState::new(service)));

    let mut seen = Vec::new();
    let mut page_number: u32 = 1;
    loop {
        let uri = format!("/api/todos?page={page_number}&pageSize=2000");
        let resp = app.clone().oneshot(get(&uri)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let page: Page<TodoItem> = body_json(resp).await;
        assert_eq!(page.page_size, 2000);
        assert_eq!(page.total_pages, 2);
        seen.extend(page.items.into_iter().map(|t| t.id));
        if u64::from(page_number) >= page.total_pages {
            break;
        }
        page_number += 1;
    }
    assert_eq!(seen.len(), 2500);
    seen.dedup();
    assert_eq!(seen.len(), 2500);
}

#[tokio::test]
async fn list_non_numeric_page_size_has_json_error_body() {
    let resp = app().oneshot(get("/api/todos?pageSize=lots")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert!(body["error"].is_string());
}

// --- create ---

#[tokio::test]
async fn create_returns_201_with_location() {
    let resp = app()
        .oneshot(json_request("POST", "/api/todos", &json!({"id": 77, "title": "Buy milk"})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let location = resp.headers().get(http::header::LOCATION).unwrap().to_str().unwrap().to_owned();
    let todo: TodoItem = body_json(resp).await;
    assert_ne!(todo.id, 77);
    assert_eq!(todo.title, "Buy milk");
    assert!(!todo.is_completed);
    assert_eq!(location, format!("/api/todos/{}", todo.id));
}

#[tokio::test]
async fn create_then_list_shows_new_item_first() {
    let app = app();
    create(&app, "older").await;
    let newest = create(&app, "newest").await;
    let resp = app.oneshot(get("/api/todos?page=1&pageSize=1")).await.unwrap();
    let page: Page<TodoItem> = body_json(resp).await;
    assert_eq!(page.items, vec![newest]);
}

#[tokio::test]
async fn create_without_title_is_rejected() {
    let resp = app()
        .oneshot(json_request("POST", "/api/todos", &json!({"isCompleted": true})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("title"));
}

#[tokio::test]
async fn create_malformed_json_has_json_error_body() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/todos")
        .header(http::header::CONTENT_TYPE, "application/json")
        .body("{\"title\": ".to_owned())
        .unwrap();
    let resp = app().oneshot(request).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn get_non_numeric_id_has_json_error_body() {
    let resp = app().oneshot(get("/api/todos/abc")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert!(body["error"].is_string());
}

// --- get ---

#[tokio::test]
async fn get_round_trip() {
    let app = app();
    let created = create(&app, "Buy milk").await;
    let resp = app.oneshot(get(&format!("/api/todos/{}", created.id))).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body, json!({"id": created.id, "title": "Buy milk", "isCompleted": false}));
}

#[tokio::test]
async fn get_missing_is_404() {
    let resp = app().oneshot(get("/api/todos/12345")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = body_json(resp).await;
    assert_eq!(body["error"], "todo '12345' not found");
}

// --- update ---

#[tokio::test]
async fn update_toggles_and_ignores_title() {
    let app = app();
    let created = create(&app, "Walk dog").await;
    let uri = format!("/api/todos/{}", created.id);

    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &uri,
            &json!({"id": created.id, "title": "something else", "isCompleted": true}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: TodoItem = body_json(resp).await;
    assert!(updated.is_completed);

    let resp = app.oneshot(get(&uri)).await.unwrap();
    let fetched: TodoItem = body_json(resp).await;
    assert!(fetched.is_completed);
    assert_eq!(fetched.title, "Walk dog");
}

#[tokio::test]
async fn update_id_mismatch_is_400_and_store_unchanged() {
    let app = app();
    let created = create(&app, "a").await;
    let uri = format!("/api/todos/{}", created.id);

    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &uri,
            &json!({"id": created.id + 1, "title": "a", "isCompleted": true}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let fetched: TodoItem = body_json(app.oneshot(get(&uri)).await.unwrap()).await;
    assert!(!fetched.is_completed);
}

#[tokio::test]
async fn update_missing_is_404() {
    let resp = app()
        .oneshot(json_request("PUT", "/api/todos/9", &json!({"id": 9, "title": "x", "isCompleted": true})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- delete ---

#[tokio::test]
async fn delete_returns_204_then_404() {
    let app = app();
    let created = create(&app, "doomed").await;
    let uri = format!("/api/todos/{}", created.id);

    let resp = app.clone().oneshot(delete(&uri)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    let resp = app.clone().oneshot(delete(&uri)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let resp = app.oneshot(get(&uri)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_missing_leaves_count_unchanged() {
    let app = app();
    create(&app, "keep").await;
    let resp = app.clone().oneshot(delete("/api/todos/999")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let page: Page<TodoItem> = body_json(app.oneshot(get("/api/todos")).await.unwrap()).await;
    assert_eq!(page.total_count, 1);
}

// --- ambient ---

#[tokio::test]
async fn health_and_viewer() {
    let app = app();
    let resp = app.clone().oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.oneshot(get("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("/api/todos"));
}
