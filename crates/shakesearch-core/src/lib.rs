//! shakesearch-core — corpus index and query engine.
//!
//! The corpus is loaded once, indexed once, and then shared read-only by
//! every query for the rest of the process lifetime.
//!
//! # Architecture
//!
//! ```text
//! query ──► Pattern ──► CorpusIndex::find_matches ──► page ──► snippets
//! ```
//!
//! [`Searcher`] owns the corpus and its index. Wrap it in an `Arc` to share it
//! across request handlers; no locking is required because nothing mutates
//! after construction.

pub mod config;
pub mod engine;
pub mod error;
pub mod index;
pub mod pattern;
pub mod types;

pub use engine::Searcher;
pub use error::SearchError;
pub use index::{CorpusIndex, Plan};
pub use pattern::Pattern;
pub use types::Match;
