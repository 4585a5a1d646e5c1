//! Query compilation.
//!
//! A raw query is always treated literally: every regex metacharacter is
//! escaped, and the result is compiled case-insensitively. Alongside the
//! compiled regex the pattern keeps an ASCII-folded copy of the literal, which
//! is what the suffix array is searched with.

use crate::error::SearchError;
use regex::bytes::{Regex, RegexBuilder};

/// Default compiled-program size limit, matching the `regex` crate default.
pub const DEFAULT_SIZE_LIMIT: usize = 10 * (1 << 20);

/// A compiled, case-insensitive, metacharacter-escaped query.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    folded: Option<Vec<u8>>,
    empty: bool,
}

impl Pattern {
    /// Compile `query` with the default size limit.
    pub fn compile(query: &str) -> Result<Self, SearchError> {
        Self::compile_with_limit(query, DEFAULT_SIZE_LIMIT)
    }

    /// Compile `query`, failing with [`SearchError::InvalidQuery`] if the
    /// compiled program would exceed `size_limit` bytes.
    pub fn compile_with_limit(query: &str, size_limit: usize) -> Result<Self, SearchError> {
        let source = format!("(?i){}", regex::escape(query));
        let regex = RegexBuilder::new(&source).size_limit(size_limit).build()?;

        // Unicode simple case folding and ASCII folding agree on ASCII input
        // everywhere except K/k and S/s, which the index checks for itself.
        let folded = query
            .is_ascii()
            .then(|| query.as_bytes().to_ascii_lowercase());

        Ok(Self {
            regex,
            folded,
            empty: query.is_empty(),
        })
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// The lower-cased literal, if the query is pure ASCII.
    pub fn folded_literal(&self) -> Option<&[u8]> {
        self.folded.as_deref()
    }

    /// An empty query matches nowhere, not everywhere.
    pub fn is_empty(&self) -> bool {
        self.empty
    }
}
