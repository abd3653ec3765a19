//! HTTP surface: the upload form and the upload endpoint

mod response;
mod routes;
mod state;

pub use response::success_message;
pub use routes::{INDEX_HTML, router};
pub use state::AppState;

use anyhow::{Context, Result};
use log::info;
use tokio::net::TcpListener;

/// Bind to the configured address and serve until the process is stopped
pub async fn serve(state: AppState) -> Result<()> {
    let addr = state.config.bind_addr;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on http://{}", listener.local_addr().unwrap_or(addr));
    axum::serve(listener, router(state))
        .await
        .context("HTTP server error")
}
