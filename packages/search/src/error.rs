//! Typed errors for the search library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to keep the error
//! surface strongly typed for callers.
//!
//! The taxonomy is deliberately narrow: extraction and predicate building
//! are total over string input and never fail. Empty or missing query text
//! yields an empty record, and a detector outage silently drops the breed
//! guess. Errors only arise at the storage seam.

use thiserror::Error;

/// Errors that can occur during search operations.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Storage operation failed
    #[error("storage error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
