//! Catalog error types

use thiserror::Error;

/// Errors that can occur during re-homing and catalog lookups.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Re-homing target has no stable name, so no definition can be bound
    #[error("re-homing target has no stable name; its definition cannot be recovered")]
    Unnamed,

    /// Name already bound to a different definition
    #[error("catalog collision: `{0}` is already bound to a different definition")]
    Collision(String),

    /// Name not bound in the catalog
    #[error("catalog entry not found: {0}")]
    Missing(String),

    /// Entry exists but is not a greeting
    #[error("catalog entry `{0}` is not a greeting")]
    NotAGreeting(String),

    /// Entry exists but is not an aggregator class
    #[error("catalog entry `{0}` is not an aggregator")]
    NotAnAggregator(String),

    /// Snapshot encode/decode failure
    #[error("snapshot error: {0}")]
    Snapshot(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Snapshot(e.to_string())
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
