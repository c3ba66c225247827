//! Error types for sheetwire-client

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sheetwire-client
#[derive(Debug, Error)]
pub enum Error {
    /// A marshaling error from the core
    #[error(transparent)]
    Core(#[from] sheetwire_core::Error),

    /// A wire-layer error (decode, deserialization, missing grid data)
    #[error(transparent)]
    Api(#[from] sheetwire_api::Error),

    /// The transport failed to complete a call
    #[error("Transport error: {0}")]
    Transport(String),

    /// The requested tab does not exist in the workbook
    #[error("Tab not found: {0}")]
    TabNotFound(String),

    /// The requested workbook does not exist or is inaccessible
    #[error("Workbook not found: {0}")]
    WorkbookNotFound(String),

    /// The service answered with a shape the client cannot use
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}
