//! Error types for token acquisition.

/// Result type alias for token operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while acquiring a token.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// `OAuth2` error returned by the token endpoint.
    #[error("OAuth2 error: {error} - {description}")]
    OAuth {
        /// Error code (e.g., `invalid_client`).
        error: String,
        /// Human-readable description.
        description: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Token endpoint returned something other than a token.
    #[error("Invalid token response: {0}")]
    InvalidResponse(String),

    /// URL parsing error.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// Creates an OAuth error from error code and description.
    #[must_use]
    pub fn oauth_error(error: impl Into<String>, description: impl Into<String>) -> Self {
        Self::OAuth {
            error: error.into(),
            description: description.into(),
        }
    }
}
