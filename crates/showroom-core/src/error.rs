//! Error types for the Showroom catalog browser.

use std::path::PathBuf;
use thiserror::Error;

/// Query failures. These are the only two conditions the browser recognizes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A price range that is not of the form `min-max`.
    #[error("Invalid price range format: {range:?}")]
    InvalidRangeFormat { range: String },

    /// Search submitted with nothing to search for.
    #[error("Type something to search.")]
    EmptyQuery,
}

/// Catalog loading errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error.
    #[error("Failed to read {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Two products share an id.
    #[error("Duplicate product id: {0}")]
    DuplicateId(u32),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error.
    #[error("Failed to read {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),
}
