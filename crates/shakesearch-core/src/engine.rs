//! Query engine — compiles a query, pulls one page of matches from the index,
//! and cuts a context window around each.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::index::CorpusIndex;
use crate::pattern::Pattern;
use crate::types::Match;
use std::path::Path;
use std::time::Instant;

/// The loaded corpus, its index, and the search settings.
///
/// Immutable once built; share it behind an `Arc`.
#[derive(Debug)]
pub struct Searcher {
    index: CorpusIndex,
    config: SearchConfig,
}

impl Searcher {
    /// Read the corpus at `path` and index it.
    pub fn load(path: impl AsRef<Path>, config: SearchConfig) -> Result<Self, SearchError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| SearchError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "corpus read");
        Self::from_bytes(bytes, config)
    }

    /// Index an in-memory corpus.
    pub fn from_bytes(
        bytes: impl Into<Vec<u8>>,
        config: SearchConfig,
    ) -> Result<Self, SearchError> {
        let started = Instant::now();
        let index = CorpusIndex::build(bytes.into())?;
        tracing::info!(
            bytes = index.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "corpus indexed"
        );
        Ok(Self { index, config })
    }

    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }

    /// One page of snippets using the configured page size.
    pub fn search_page(&self, query: &str, offset: i64) -> Result<Vec<String>, SearchError> {
        self.search(query, offset, self.config.page_size)
    }

    /// Snippets for matches `offset..offset + limit` of `query`, in corpus
    /// order.
    ///
    /// Negative offsets are treated as zero. An offset at or past the last
    /// match yields an empty page. Only a query that fails to compile is an
    /// error.
    pub fn search(
        &self,
        query: &str,
        offset: i64,
        limit: usize,
    ) -> Result<Vec<String>, SearchError> {
        let started = Instant::now();
        let pattern = Pattern::compile_with_limit(query, self.config.regex_size_limit)?;

        let offset = usize::try_from(offset).unwrap_or(0);
        let matches = self
            .index
            .find_matches(&pattern, offset.saturating_add(limit));

        let snippets: Vec<String> = page(&matches, offset, limit)
            .iter()
            .map(|m| snippet(self.index.text(), *m, self.config.context_bytes))
            .collect();

        tracing::debug!(
            query,
            offset,
            limit,
            matched = matches.len(),
            returned = snippets.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "search"
        );
        Ok(snippets)
    }
}

/// `matches[offset..offset + limit]`, clamped to what exists.
fn page(matches: &[Match], offset: usize, limit: usize) -> &[Match] {
    if offset >= matches.len() {
        return &[];
    }
    let end = offset.saturating_add(limit).min(matches.len());
    &matches[offset..end]
}

/// `context` bytes either side of `m`, clamped to the corpus and narrowed to
/// UTF-8 character boundaries. The match itself is always kept whole.
fn snippet(text: &[u8], m: Match, context: usize) -> String {
    let mut start = m.start.saturating_sub(context);
    let mut end = m.end.saturating_add(context).min(text.len());

    while start < m.start && is_continuation(text[start]) {
        start += 1;
    }
    while end > m.end && end < text.len() && is_continuation(text[end]) {
        end -= 1;
    }
    String::from_utf8_lossy(&text[start..end]).into_owned()
}

fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}
