use std::sync::Arc;

use anyhow::Result;
use tasklist_core::env_non_empty;
use tasklist_http::{AppState, create_router};
use tasklist_service::TodoService;
use tasklist_storage::{PgPoolConfig, StorageBackend};

async fn open_storage(memory: bool) -> Result<StorageBackend> {
    if memory {
        return Ok(StorageBackend::new_memory());
    }
    match env_non_empty("DATABASE_URL") {
        Some(url) => Ok(StorageBackend::new_postgres(&url, PgPoolConfig::from_env()).await?),
        None => {
            tracing::warn!("DATABASE_URL not set, todos are kept in memory and lost on exit");
            Ok(StorageBackend::new_memory())
        },
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

pub(crate) async fn run(port: u16, host: String, memory: bool) -> Result<()> {
    let storage = open_storage(memory).await?;
    tracing::info!(backend = storage.kind(), "Item store ready");

    let todo_service = Arc::new(TodoService::new(Arc::new(storage)));
    let state = Arc::new(AppState::new(todo_service));

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}
