//! Domain-specific assertion macros for shakesearch harnesses.

/// Assert that every snippet contains `query`, ignoring case.
///
/// ```rust
/// assert_snippets_contain!(results, "Hamlet");
/// ```
#[macro_export]
macro_rules! assert_snippets_contain {
    ($snippets:expr, $query:expr) => {{
        let query: &str = $query;
        let needle = query.to_lowercase();
        for (i, snippet) in $snippets.iter().enumerate() {
            if !snippet.to_lowercase().contains(&needle) {
                panic!(
                    "assert_snippets_contain! failed: snippet #{} does not contain {:?}\n  snippet: {:?}",
                    i, query, snippet
                );
            }
        }
    }};
}

/// Assert that every snippet is a contiguous substring of `corpus`.
#[macro_export]
macro_rules! assert_snippets_in_corpus {
    ($snippets:expr, $corpus:expr) => {{
        let corpus: &str = $corpus;
        for (i, snippet) in $snippets.iter().enumerate() {
            if !corpus.contains(snippet.as_str()) {
                panic!(
                    "assert_snippets_in_corpus! failed: snippet #{} is not part of the corpus\n  snippet: {:?}",
                    i, snippet
                );
            }
        }
    }};
}
