//! Error types for sheetwire-api

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sheetwire-api
#[derive(Debug, Error)]
pub enum Error {
    /// A marshaling error from the core (cell decode, labels, shapes)
    #[error(transparent)]
    Core(#[from] sheetwire_core::Error),

    /// A response body could not be deserialized
    #[error("Malformed API response: {0}")]
    Json(#[from] serde_json::Error),

    /// A response was missing the grid data the request asked for
    #[error("Response carries no grid data for the requested range")]
    MissingGridData,
}
