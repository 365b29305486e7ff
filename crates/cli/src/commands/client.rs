use anyhow::Result;
use tasklist_client::{ApiClient, ClientState, TodoController};

use crate::terminal::TerminalView;

fn controller(api_url: &str) -> TodoController {
    TodoController::new(ApiClient::new(api_url))
}

pub(crate) async fn list(api_url: &str, page: u32, page_size: u32) -> Result<()> {
    let mut state = ClientState::new(page, page_size);
    let mut view = TerminalView::stdout(false);
    controller(api_url).load(&mut state, &mut view).await?;
    Ok(())
}

pub(crate) async fn add(api_url: &str, title: &str) -> Result<()> {
    let mut state = ClientState::default();
    let mut view = TerminalView::stdout(false);
    if controller(api_url).add(&mut state, &mut view, title).await?.is_none() {
        anyhow::bail!("title must not be empty");
    }
    Ok(())
}

/// The terminal has no rendered row to read from, so the displayed state is
/// fetched first and then toggled exactly like a row on screen.
pub(crate) async fn toggle(api_url: &str, id: i64) -> Result<()> {
    let controller = controller(api_url);
    let displayed = controller.api().get(id).await?;
    let mut state = ClientState::default();
    let mut view = TerminalView::stdout(false);
    controller.toggle(&mut state, &mut view, &displayed).await?;
    Ok(())
}

pub(crate) async fn delete(
    api_url: &str,
    id: i64,
    assume_yes: bool,
    page: u32,
    page_size: u32,
) -> Result<()> {
    let mut state = ClientState::new(page, page_size);
    let mut view = TerminalView::stdout(assume_yes);
    if !controller(api_url).delete(&mut state, &mut view, id).await? {
        tracing::info!(id, "delete cancelled");
    }
    Ok(())
}
