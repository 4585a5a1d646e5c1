//! shakesearch-http — the HTTP surface over [`shakesearch_core::Searcher`].
//!
//! `GET /search?q=...&offset=...` returns a JSON array of snippets; every
//! other path is served from the static asset directory.

pub mod error;
pub mod handlers;
pub mod router;

pub use error::ApiError;
pub use router::create_router;

use shakesearch_core::config::ServerConfig;
use shakesearch_core::Searcher;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Bind to the configured address and serve until Ctrl-C.
pub async fn serve(config: &ServerConfig, searcher: Arc<Searcher>) -> anyhow::Result<()> {
    let app = create_router(searcher, &config.static_dir);
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(
        "shakesearch available at http://{}...",
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install Ctrl-C handler: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
