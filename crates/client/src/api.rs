//! Thin reqwest wrapper over the `/api/todos` endpoints.

use reqwest::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tasklist_core::{TODOS_API_PATH, TodoInput, TodoItem};

use crate::error::ClientError;

/// The part of the page envelope the client relies on.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListResponse {
    pub items: Vec<TodoItem>,
    pub total_count: u64,
}

/// HTTP client for one tasklist server. No timeouts and no retries.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    #[must_use]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { client, base_url }
    }

    fn todos_url(&self) -> String {
        format!("{}{TODOS_API_PATH}", self.base_url)
    }

    fn todo_url(&self, id: i64) -> String {
        format!("{}{TODOS_API_PATH}/{id}", self.base_url)
    }

    pub(crate) async fn list(&self, page: u32, page_size: u32) -> Result<ListResponse, ClientError> {
        let response = self
            .client
            .get(self.todos_url())
            .query(&[("page", page), ("pageSize", page_size)])
            .send()
            .await?;
        let value: serde_json::Value = read_json(response).await?;
        if !value.get("items").is_some_and(serde_json::Value::is_array) {
            return Err(ClientError::Shape("response has no items array".to_owned()));
        }
        serde_json::from_value(value).map_err(|e| ClientError::Shape(e.to_string()))
    }

    pub async fn create(&self, input: &TodoInput) -> Result<TodoItem, ClientError> {
        let response = self.client.post(self.todos_url()).json(input).send().await?;
        read_json(response).await
    }

    pub async fn get(&self, id: i64) -> Result<TodoItem, ClientError> {
        let response = self.client.get(self.todo_url(id)).send().await?;
        read_json(response).await
    }

    /// Only the status is checked; whatever body the server returns is ignored.
    pub async fn update(&self, id: i64, input: &TodoInput) -> Result<(), ClientError> {
        let response = self.client.put(self.todo_url(id)).json(input).send().await?;
        check_status(&response)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        let response = self.client.delete(self.todo_url(id)).send().await?;
        check_status(&response)
    }
}

fn check_status(response: &Response) -> Result<(), ClientError> {
    let status = response.status();
    if status.is_success() { Ok(()) } else { Err(ClientError::Status(status)) }
}

/// Status check, then body read (transport), then decode (shape).
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    check_status(&response)?;
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Shape(e.to_string()))
}
