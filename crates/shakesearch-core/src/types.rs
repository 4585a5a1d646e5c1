//! Core types shared by the index and the query engine.

/// One pattern occurrence as a half-open byte interval `[start, end)` into
/// the corpus.
///
/// Matches returned by [`CorpusIndex::find_matches`](crate::CorpusIndex::find_matches)
/// are in ascending `start` order and never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Match {
    pub start: usize,
    pub end: usize,
}

impl Match {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "match start {start} is past end {end}");
        Self { start, end }
    }
}
