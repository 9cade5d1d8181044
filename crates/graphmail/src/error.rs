//! Error types for mail sending.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while sending mail.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or blank credentials, raised at construction.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unusable input, raised before any network call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The Graph API rejected or failed the request.
    #[error("Graph error: {code}: {message}")]
    RemoteApi {
        /// Provider error code (e.g., `ErrorInvalidRecipients`).
        code: String,
        /// Provider error message, carried through unchanged.
        message: String,
    },

    /// Any other fault during message construction or transmission.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<graphmail_auth::Error> for Error {
    fn from(err: graphmail_auth::Error) -> Self {
        match err {
            // Token endpoint rejections are remote failures like any other
            // Graph rejection; everything else is transport/decode trouble.
            graphmail_auth::Error::OAuth { error, description } => Self::RemoteApi {
                code: error,
                message: description,
            },
            graphmail_auth::Error::InvalidConfig(msg) => Self::Configuration(msg),
            other => Self::Unexpected(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Unexpected(err.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_oauth_error_maps_to_remote_api() {
        let err: Error = graphmail_auth::Error::oauth_error("invalid_client", "bad secret").into();
        assert!(matches!(
            err,
            Error::RemoteApi { code, message } if code == "invalid_client" && message == "bad secret"
        ));
    }

    #[test]
    fn test_auth_config_error_maps_to_configuration() {
        let err: Error = graphmail_auth::Error::InvalidConfig("tenant_id is blank".into()).into();
        assert!(matches!(err, Error::Configuration(msg) if msg.contains("tenant_id")));
    }

    #[test]
    fn test_display_carries_provider_message() {
        let err = Error::RemoteApi {
            code: "ErrorSendAsDenied".to_string(),
            message: "The user account does not have permission to send as this sender".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("ErrorSendAsDenied"));
        assert!(text.contains("permission to send as"));
    }
}
