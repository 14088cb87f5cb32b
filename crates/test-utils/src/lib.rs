//! Fixture errors and helpers shared by the causeway integration tests.

use std::fmt;

use causeway::{CauseProvider, ChainError, OriginProvider, SharedError, VerboseFormatter};

/**
Install a basic tracing subscriber if none is set yet. Honors RUST_LOG-like env filters.
Returns true if a subscriber was installed by this call, false if one already existed.
*/
pub fn init_tracing_once() -> bool {
    use tracing_subscriber::{EnvFilter, fmt};
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .is_ok()
}

/// Sentinel classifications, compared by value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DbError {
    #[error("database unavailable")]
    Unavailable,

    #[error("query timed out")]
    Timeout,

    #[error("table {table} is corrupted")]
    Corrupted { table: String },
}

impl ChainError for DbError {}

/// A leaf error with its own detailed rendering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("query failed")]
pub struct QueryError {
    pub statement: String,
}

impl QueryError {
    pub fn new(statement: impl Into<String>) -> Self {
        Self {
            statement: statement.into(),
        }
    }
}

impl ChainError for QueryError {
    fn as_verbose_formatter(&self) -> Option<&dyn VerboseFormatter> {
        Some(self)
    }
}

impl VerboseFormatter for QueryError {
    fn fmt_verbose(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "query failed\n  statement: {}", self.statement)
    }
}

/// A classification/origin pair defined outside causeway, to check that the
/// traversals only rely on capabilities.
#[derive(Debug, thiserror::Error)]
#[error("{kind} ({source})")]
pub struct Classified {
    pub kind: DbError,
    #[source]
    pub source: std::io::Error,
}

impl ChainError for Classified {
    fn as_cause_provider(&self) -> Option<&dyn CauseProvider> {
        Some(self)
    }

    fn as_origin_provider(&self) -> Option<&dyn OriginProvider> {
        Some(self)
    }
}

impl CauseProvider for Classified {
    fn cause(&self) -> &dyn ChainError {
        &self.kind
    }
}

impl OriginProvider for Classified {
    fn origin(&self) -> &dyn ChainError {
        &self.source
    }
}

/// Exposes an origin (the last failed attempt) but no classification.
#[derive(Debug, thiserror::Error)]
#[error("retries exhausted after {attempts} attempts")]
pub struct RetriesExhausted {
    pub attempts: u32,
    pub last: SharedError,
}

impl ChainError for RetriesExhausted {
    fn as_origin_provider(&self) -> Option<&dyn OriginProvider> {
        Some(self)
    }
}

impl OriginProvider for RetriesExhausted {
    fn origin(&self) -> &dyn ChainError {
        &*self.last
    }
}

pub fn refused() -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused")
}
