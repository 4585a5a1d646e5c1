use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shakesearch_core::SearchError;
use thiserror::Error;

/// Request-level failures, each mapped to a status code and a plain-text body.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("missing search query in URL params")]
    MissingQuery,

    #[error("bad query in URL params: {0}")]
    BadQuery(#[from] SearchError),

    #[error("encoding failure")]
    Encoding(#[source] serde_json::Error),

    #[error("search task failed")]
    Task(#[source] tokio::task::JoinError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingQuery => StatusCode::BAD_REQUEST,
            ApiError::BadQuery(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::BadQuery(_) | ApiError::Encoding(_) | ApiError::Task(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = ?self, "search request failed");
        } else {
            tracing::debug!(error = %self, "search request rejected");
        }
        (status, self.to_string()).into_response()
    }
}
