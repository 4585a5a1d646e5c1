use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use shakesearch_core::Searcher;
use std::sync::Arc;

use crate::error::ApiError;

/// Raw query-string parameters. `offset` is kept as text so that a malformed
/// value falls back to the first page instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub offset: Option<String>,
}

/// `GET /search?q=<text>[&offset=<n>]`
pub async fn handle_search(
    State(searcher): State<Arc<Searcher>>,
    Query(params): Query<SearchParams>,
) -> Result<Response, ApiError> {
    let query = params
        .q
        .filter(|q| !q.is_empty())
        .ok_or(ApiError::MissingQuery)?;
    let offset = parse_offset(params.offset.as_deref());

    let results = tokio::task::spawn_blocking(move || searcher.search_page(&query, offset))
        .await
        .map_err(ApiError::Task)??;

    let body = serde_json::to_vec(&results).map_err(ApiError::Encoding)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// Offsets must parse as a non-negative 32-bit integer; anything else means 0.
pub fn parse_offset(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.parse::<i32>().ok())
        .filter(|o| *o >= 0)
        .map(i64::from)
        .unwrap_or(0)
}
