//! shakesearch — full-text search over a single in-memory corpus.
//!
//! This crate re-exports the two workspace layers so that integration tests
//! and benches can import them from one place.
//!
//! # Architecture
//!
//! ```text
//! HTTP (shakesearch-http) ──► Searcher ──► CorpusIndex
//!                                 │
//!                                 └──► snippets
//! ```
//!
//! The corpus is read and indexed once at startup; requests only ever read it.

pub use shakesearch_core::config::{Config, SearchConfig};
pub use shakesearch_core::{CorpusIndex, Match, Pattern, SearchError, Searcher};
pub use shakesearch_http::{create_router, serve, ApiError};
