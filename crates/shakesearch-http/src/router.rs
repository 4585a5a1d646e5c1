use axum::{routing::get, Router};
use shakesearch_core::Searcher;
use std::path::Path;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use super::handlers::handle_search;

/// Build the application router.
///
/// The searcher is shared read-only across requests; `static_dir` backs every
/// route other than `/search`.
pub fn create_router(searcher: Arc<Searcher>, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/search", get(handle_search))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .with_state(searcher)
        .layer(TraceLayer::new_for_http())
}
