//! Error types for media extraction
//!
//! One variant per failure class so callers (and operators watching for
//! provider-format drift) can tell transport problems apart from layout
//! changes in the provider's pages.

use thiserror::Error;

/// Error type for all extraction operations
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Network, DNS, TLS or timeout failure on any request
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// An expected marker/pattern was absent from a response.
    ///
    /// Carries the name of the pattern that failed to match, so a provider
    /// layout change shows up as a single named failure.
    #[error("pattern not found: {0}")]
    NotFound(&'static str),

    /// The embedded blob failed strict JSON parsing after sanitization
    #[error("embedded data is not valid JSON: {0}")]
    MalformedData(#[from] serde_json::Error),

    /// A field required by the output schema resolved to null
    #[error("required field missing: {0}")]
    MissingField(String),

    /// The token-exchange response held no usable authorized URL
    #[error("token exchange failed: {0}")]
    TokenExchange(String),

    /// The decoy media response held no embedded asset identifier
    #[error("watermark identifier not found: {0}")]
    IdentifierNotFound(String),

    /// The URL does not match any supported provider
    #[error("unsupported URL: {0}")]
    UnsupportedUrl(String),

    /// Invalid or empty media/user ID provided
    #[error("invalid media ID: {0}")]
    InvalidId(String),
}

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;
