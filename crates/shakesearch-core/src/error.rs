use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the corpus loader and the query engine.
///
/// Everything else (no matches, offsets past the end of the result set) is a
/// successful, possibly empty, result.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The corpus file could not be read. Fatal at startup.
    #[error("failed to load corpus from {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The query could not be compiled into a search pattern.
    #[error("invalid query: {0}")]
    InvalidQuery(#[from] regex::Error),

    /// Suffix offsets are stored as `u32`.
    #[error("corpus of {len} bytes exceeds the indexable limit of {max} bytes")]
    CorpusTooLarge { len: usize, max: usize },
}

impl SearchError {
    /// True for errors caused by the caller's input rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, SearchError::InvalidQuery(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_names_the_path() {
        let err = SearchError::Load {
            path: PathBuf::from("completeworks.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(
            err.to_string(),
            "failed to load corpus from completeworks.txt: no such file"
        );
        assert!(!err.is_client_error());
    }

    #[test]
    fn invalid_query_is_a_client_error() {
        let err = SearchError::from(regex::Error::Syntax("unclosed group".to_string()));
        assert!(err.is_client_error());
        assert!(err.to_string().starts_with("invalid query:"));
    }
}
