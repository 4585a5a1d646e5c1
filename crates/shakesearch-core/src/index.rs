//! Corpus index — an ASCII-case-folded suffix array over the corpus bytes.
//!
//! Built once at load time, read-only afterwards. A lookup binary-searches the
//! suffix array for the block of suffixes that start with the folded query,
//! so a rare term costs a handful of comparisons no matter how large the
//! corpus is.
//!
//! Frequent terms go the other way: a bounded regex scan reaches the first
//! `max_count` occurrences after reading a small prefix of the corpus, while
//! the suffix array would still have to order every occurrence. [`Plan`]
//! picks between the two from the occurrence count.
//!
//! The suffix array can only answer ASCII-folded literal queries. When a query
//! needs full Unicode case folding (a non-ASCII query, or a corpus containing
//! characters that fold onto ASCII letters) the index always scans. Both paths
//! return the same leftmost-first, non-overlapping matches.

use crate::error::SearchError;
use crate::pattern::Pattern;
use crate::types::Match;
use memchr::memmem;
use regex::bytes::Regex;
use std::cmp::Ordering;
use std::ops::Range;

/// Largest corpus a `u32` suffix array can address.
pub const MAX_CORPUS_LEN: usize = u32::MAX as usize;

/// Bytes a literal scan gets through in the time it takes to order one
/// suffix array entry.
const SCAN_BYTES_PER_ENTRY: u128 = 64;

/// KELVIN SIGN folds to `k`.
const KELVIN_SIGN: &[u8] = "\u{212A}".as_bytes();
/// LATIN SMALL LETTER LONG S folds to `s`.
const LONG_S: &[u8] = "\u{017F}".as_bytes();

/// How a query will be answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    /// Empty pattern or zero budget.
    Nothing,
    /// Collect from this block of the suffix array.
    Lookup { block: Range<usize>, width: usize },
    /// Bounded regex scan from the start of the corpus.
    Scan,
}

/// Immutable corpus plus its suffix array.
pub struct CorpusIndex {
    text: Vec<u8>,
    suffixes: Vec<u32>,
    /// False when the corpus contains a non-ASCII character whose simple case
    /// fold is an ASCII letter; ASCII folding would then miss matches.
    ascii_folding_exact: bool,
}

impl CorpusIndex {
    /// Build the index over `text`.
    pub fn build(text: Vec<u8>) -> Result<Self, SearchError> {
        if text.len() > MAX_CORPUS_LEN {
            return Err(SearchError::CorpusTooLarge {
                len: text.len(),
                max: MAX_CORPUS_LEN,
            });
        }

        let suffixes = build_suffix_array(&text);
        let ascii_folding_exact = memmem::find(&text, KELVIN_SIGN).is_none()
            && memmem::find(&text, LONG_S).is_none();
        if !ascii_folding_exact {
            tracing::debug!("corpus contains non-ASCII case folds; ASCII queries will scan");
        }

        Ok(Self {
            text,
            suffixes,
            ascii_folding_exact,
        })
    }

    pub fn text(&self) -> &[u8] {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Up to `max_count` occurrences of `pattern`, in ascending offset order.
    ///
    /// An empty pattern, a pattern that never matches, or `max_count == 0`
    /// all yield an empty vector.
    pub fn find_matches(&self, pattern: &Pattern, max_count: usize) -> Vec<Match> {
        match self.plan(pattern, max_count) {
            Plan::Nothing => Vec::new(),
            Plan::Lookup { block, width } => self.collect(block, width, max_count),
            Plan::Scan => self.scan(pattern.regex(), max_count),
        }
    }

    /// Decide how [`find_matches`](Self::find_matches) answers `pattern`.
    pub fn plan(&self, pattern: &Pattern, max_count: usize) -> Plan {
        if max_count == 0 || pattern.is_empty() {
            return Plan::Nothing;
        }
        let needle = match pattern.folded_literal() {
            Some(needle) if self.ascii_folding_exact => needle,
            _ => return Plan::Scan,
        };

        let block = self.block(needle);
        if scan_is_cheaper(block.len(), max_count, self.text.len()) {
            Plan::Scan
        } else {
            Plan::Lookup {
                block,
                width: needle.len(),
            }
        }
    }

    /// Suffix array path regardless of cost. `needle` must already be
    /// ASCII-lowercased.
    #[cfg(test)]
    fn lookup(&self, needle: &[u8], max_count: usize) -> Vec<Match> {
        self.collect(self.block(needle), needle.len(), max_count)
    }

    /// Range of suffixes whose folded prefix equals `needle`.
    fn block(&self, needle: &[u8]) -> Range<usize> {
        let lo = self
            .suffixes
            .partition_point(|&s| self.compare_prefix(s, needle) == Ordering::Less);
        let hi = lo
            + self.suffixes[lo..]
                .partition_point(|&s| self.compare_prefix(s, needle) == Ordering::Equal);
        lo..hi
    }

    /// The first `max_count` non-overlapping occurrences in `block`.
    fn collect(&self, block: Range<usize>, width: usize, max_count: usize) -> Vec<Match> {
        let mut starts = self.suffixes[block].to_vec();

        if starts.len() > max_count {
            starts.select_nth_unstable(max_count);
            let head = &mut starts[..max_count];
            head.sort_unstable();
            let matches = non_overlapping(head, width, max_count);
            if matches.len() == max_count {
                return matches;
            }
            // Overlaps used up part of the head; later starts are needed.
        }

        starts.sort_unstable();
        non_overlapping(&starts, width, max_count)
    }

    /// Linear regex path; stops after `max_count` matches.
    fn scan(&self, regex: &Regex, max_count: usize) -> Vec<Match> {
        regex
            .find_iter(&self.text)
            .take(max_count)
            .map(|m| Match::new(m.start(), m.end()))
            .collect()
    }

    /// Compare the folded suffix at `start`, truncated to `needle.len()`,
    /// against `needle`.
    fn compare_prefix(&self, start: u32, needle: &[u8]) -> Ordering {
        let suffix = &self.text[start as usize..];
        for (&byte, &want) in suffix.iter().zip(needle) {
            match byte.to_ascii_lowercase().cmp(&want) {
                Ordering::Equal => {}
                other => return other,
            }
        }
        if suffix.len() < needle.len() {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }
}

impl std::fmt::Debug for CorpusIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CorpusIndex")
            .field("len", &self.text.len())
            .field("ascii_folding_exact", &self.ascii_folding_exact)
            .finish()
    }
}

/// A bounded scan reads roughly `max_count * corpus_len / occurrences` bytes
/// before it is done; collecting from the suffix array touches every one of
/// the `occurrences` entries.
fn scan_is_cheaper(occurrences: usize, max_count: usize, corpus_len: usize) -> bool {
    let occurrences = occurrences as u128;
    occurrences * occurrences * SCAN_BYTES_PER_ENTRY > max_count as u128 * corpus_len as u128
}

/// Leftmost-first selection from ascending `starts`, as a regex scan would
/// report them.
fn non_overlapping(starts: &[u32], width: usize, max_count: usize) -> Vec<Match> {
    let mut matches = Vec::with_capacity(max_count.min(starts.len()));
    let mut next_free = 0;
    for &start in starts {
        let start = start as usize;
        if start < next_free {
            continue;
        }
        matches.push(Match::new(start, start + width));
        if matches.len() == max_count {
            break;
        }
        next_free = start + width;
    }
    matches
}

/// Prefix-doubling suffix array construction over ASCII-folded bytes.
///
/// Round `k` orders suffixes by the rank pair `(rank[i], rank[i + k])` with
/// two stable counting sorts: the second key comes for free from the previous
/// round's order, so each round is linear. Rounds stop once every suffix has a
/// distinct rank, i.e. after `log2` of the longest repeated substring.
fn build_suffix_array(text: &[u8]) -> Vec<u32> {
    let n = text.len();
    if n == 0 {
        return Vec::new();
    }

    let mut rank: Vec<u32> = text
        .iter()
        .map(|b| u32::from(b.to_ascii_lowercase()))
        .collect();
    let mut order: Vec<u32> = (0..n as u32).collect();
    let mut suffixes = vec![0u32; n];
    let mut next = vec![0u32; n];

    counting_sort(&order, &mut suffixes, &rank, 256);
    let mut max_rank = rerank(&suffixes, &mut next, |i| (rank[i], 0));
    std::mem::swap(&mut rank, &mut next);

    let mut k = 1;
    while (max_rank as usize) + 1 < n {
        // Suffixes too short to have a second half sort first by it.
        order.clear();
        order.extend(n.saturating_sub(k) as u32..n as u32);
        order.extend(
            suffixes
                .iter()
                .filter(|&&s| s as usize >= k)
                .map(|&s| s - k as u32),
        );

        counting_sort(&order, &mut suffixes, &rank, max_rank as usize + 1);
        max_rank = rerank(&suffixes, &mut next, |i| {
            let second = if i + k < n { rank[i + k] + 1 } else { 0 };
            (rank[i], second)
        });
        std::mem::swap(&mut rank, &mut next);
        k *= 2;
    }
    suffixes
}

/// Stable sort of `input` into `output` by `keys[i]`, with keys in `0..buckets`.
fn counting_sort(input: &[u32], output: &mut [u32], keys: &[u32], buckets: usize) {
    let mut slots = vec![0u32; buckets + 1];
    for &i in input {
        slots[keys[i as usize] as usize + 1] += 1;
    }
    for b in 1..=buckets {
        slots[b] += slots[b - 1];
    }
    for &i in input {
        let slot = &mut slots[keys[i as usize] as usize];
        output[*slot as usize] = i;
        *slot += 1;
    }
}

/// Assign dense ranks along sorted `suffixes`; equal keys share a rank.
/// Returns the highest rank assigned.
fn rerank(suffixes: &[u32], ranks: &mut [u32], key: impl Fn(usize) -> (u32, u32)) -> u32 {
    let mut current = 0;
    ranks[suffixes[0] as usize] = 0;
    for w in 1..suffixes.len() {
        if key(suffixes[w - 1] as usize) != key(suffixes[w] as usize) {
            current += 1;
        }
        ranks[suffixes[w] as usize] = current;
    }
    current
}
