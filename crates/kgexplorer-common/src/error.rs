use std::error::Error as StdError;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Failure of a single request to the SPARQL endpoint.
///
/// Cloneable so a cached in-flight fetch can hand the same failure to every
/// caller waiting on it; underlying causes are shared behind `Arc`.
#[derive(Debug, Clone, Error)]
pub enum QueryExecutionError {
    #[error("SPARQL request failed: {0}")]
    Transport(#[source] Arc<dyn StdError + Send + Sync + 'static>),

    #[error("SPARQL endpoint error ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("malformed SPARQL reply: {0}")]
    MalformedReply(#[source] Arc<serde_json::Error>),

    #[error("binding is missing variable '?{var}'")]
    MissingVariable { var: String },

    #[error("count '{value}' is not a non-negative integer")]
    InvalidCount { value: String },
}

impl QueryExecutionError {
    pub fn transport<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Transport(Arc::new(err))
    }
}

impl From<serde_json::Error> for QueryExecutionError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedReply(Arc::new(err))
    }
}

/// Failures of the named-query catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Query '{name}' not found.")]
    QueryNotFound { name: String },

    #[error("failed to load query file {}: {reason}", path.display())]
    Load { path: PathBuf, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("The list of options is empty.")]
    EmptyOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = QueryExecutionError::Status {
            status: 503,
            body: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "SPARQL endpoint error (503): Service Unavailable");
    }

    #[test]
    fn test_malformed_reply_keeps_source() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = QueryExecutionError::from(parse_err);
        assert!(err.source().is_some());
        let cloned = err.clone();
        assert!(cloned.to_string().starts_with("malformed SPARQL reply"));
    }

    #[test]
    fn test_catalog_not_found_message() {
        let err = CatalogError::QueryNotFound { name: "missing".into() };
        assert_eq!(err.to_string(), "Query 'missing' not found.");
    }
}
