// catalog/error.rs - Errors raised while fetching a remote catalog
//
// These never reach the view: the loader turns every one of them into the
// fallback catalog and logs it.

use thiserror::Error;

/// Result type alias for catalog source operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failures of a catalog source.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Connection, timeout or other transport failure.
    #[cfg(feature = "fetch")]
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("Catalog request failed with status {status}: {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The body was not a JSON array of products.
    #[error("Invalid catalog response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Source-specific failure without a more precise category.
    #[error("Catalog source unavailable: {0}")]
    Unavailable(String),
}

impl CatalogError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}
