//! Access token types.

use crate::error::{Error, Result};
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

/// An access token with expiry metadata.
#[derive(Debug, Clone)]
pub struct Token {
    /// Access token string.
    pub access_token: String,
    /// Token type (usually "Bearer").
    pub token_type: String,
    /// Expiration time.
    pub expires_at: Option<DateTime<Utc>>,
}

impl Token {
    /// Creates a token from a token endpoint response.
    pub(crate) fn from_response(response: TokenResponse) -> Result<Self> {
        if response.access_token.is_empty() {
            return Err(Error::InvalidResponse("empty access_token".to_string()));
        }

        let expires_at = response
            .expires_in
            .map(|secs| Utc::now() + Duration::seconds(i64::from(secs)));

        Ok(Self {
            access_token: response.access_token,
            token_type: response.token_type,
            expires_at,
        })
    }

    /// Checks if the token is expired (with 60 second buffer).
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at
            .is_some_and(|exp| Utc::now() + Duration::seconds(60) >= exp)
    }

    /// Returns true if the token is valid (not expired).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.is_expired()
    }
}

/// Successful response from the token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub expires_in: Option<u32>,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

/// Error response from the token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: String,
    #[serde(default)]
    pub error_description: String,
}

impl ErrorResponse {
    pub(crate) fn into_error(self) -> Error {
        Error::oauth_error(self.error, self.error_description)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_token_from_response() {
        let response = TokenResponse {
            access_token: "access123".to_string(),
            token_type: "Bearer".to_string(),
            expires_in: Some(3600),
        };
        let token = Token::from_response(response).unwrap();
        assert_eq!(token.access_token, "access123");
        assert_eq!(token.token_type, "Bearer");
        assert!(token.is_valid());
    }

    #[test]
    fn test_empty_access_token_rejected() {
        let response = TokenResponse {
            access_token: String::new(),
            token_type: "Bearer".to_string(),
            expires_in: None,
        };
        assert!(matches!(
            Token::from_response(response),
            Err(Error::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_token_without_expiry_never_expires() {
        let token = Token {
            access_token: "access123".to_string(),
            token_type: "Bearer".to_string(),
            expires_at: None,
        };
        assert!(!token.is_expired());
    }

    #[test]
    fn test_token_expired_within_buffer() {
        // 30 seconds left is inside the 60 second refresh buffer.
        let token = Token {
            access_token: "access123".to_string(),
            token_type: "Bearer".to_string(),
            expires_at: Some(Utc::now() + Duration::seconds(30)),
        };
        assert!(token.is_expired());
    }

    #[test]
    fn test_token_valid_outside_buffer() {
        let token = Token {
            access_token: "access123".to_string(),
            token_type: "Bearer".to_string(),
            expires_at: Some(Utc::now() + Duration::seconds(3600)),
        };
        assert!(token.is_valid());
    }

    #[test]
    fn test_error_response_parsing() {
        let json = r#"{"error":"invalid_client","error_description":"AADSTS7000215: Invalid client secret provided."}"#;
        let response: ErrorResponse = serde_json::from_str(json).unwrap();
        let err = response.into_error();
        assert!(matches!(
            err,
            Error::OAuth { error, description }
                if error == "invalid_client" && description.starts_with("AADSTS7000215")
        ));
    }
}
