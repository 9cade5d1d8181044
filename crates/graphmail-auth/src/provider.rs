//! Client-credential token provider with in-process caching.

use crate::credentials::ClientCredentials;
use crate::error::Result;
use crate::token::{ErrorResponse, Token, TokenResponse};
use reqwest::Client;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::debug;
use url::Url;

/// Default authority host for the Microsoft identity platform.
pub const DEFAULT_AUTHORITY: &str = "https://login.microsoftonline.com";

/// Acquires bearer tokens via the `client_credentials` grant and caches
/// them until shortly before expiry.
///
/// Safe to share across tasks: the cached token sits behind an async mutex
/// and everything else is immutable. The mutex is held across the refresh,
/// so when the cache is stale only one caller fetches; the rest wait and
/// then read the fresh token.
#[derive(Debug)]
pub struct TokenProvider {
    credentials: ClientCredentials,
    scope: String,
    token_url: Url,
    http: Client,
    cached: Mutex<Option<Token>>,
}

impl TokenProvider {
    /// Creates a provider requesting tokens for `scope` against the
    /// default authority.
    ///
    /// # Errors
    ///
    /// Returns an error if the token endpoint URL cannot be constructed
    /// from the tenant id.
    pub fn new(credentials: ClientCredentials, scope: impl Into<String>) -> Result<Self> {
        let token_url = token_url(DEFAULT_AUTHORITY, credentials.tenant_id())?;
        Ok(Self {
            credentials,
            scope: scope.into(),
            token_url,
            http: Client::new(),
            cached: Mutex::new(None),
        })
    }

    /// Points the provider at a different authority host (national clouds).
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting token endpoint URL is invalid.
    pub fn with_authority(mut self, authority: impl AsRef<str>) -> Result<Self> {
        self.token_url = token_url(authority.as_ref(), self.credentials.tenant_id())?;
        Ok(self)
    }

    /// Returns a valid bearer token string, fetching a new one if the
    /// cached token is absent or about to expire.
    ///
    /// # Errors
    ///
    /// Returns an error if the token endpoint rejects the credentials or
    /// the request fails.
    pub async fn bearer_token(&self) -> Result<String> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref() {
            if token.is_valid() {
                debug!("Using cached access token");
                return Ok(token.access_token.clone());
            }
        }

        debug!(scope = %self.scope, "Requesting new access token");
        let token = self.request_token().await?;
        let access_token = token.access_token.clone();
        *cached = Some(token);

        Ok(access_token)
    }

    async fn request_token(&self) -> Result<Token> {
        let mut params = HashMap::new();
        params.insert("grant_type", "client_credentials");
        params.insert("client_id", self.credentials.client_id());
        params.insert("client_secret", self.credentials.client_secret());
        params.insert("scope", &self.scope);

        let response = self
            .http
            .post(self.token_url.clone())
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let error: ErrorResponse = response.json().await?;
            return Err(error.into_error());
        }

        let token_response: TokenResponse = response.json().await?;
        Token::from_response(token_response)
    }
}

/// Builds the v2.0 token endpoint URL for a tenant.
fn token_url(authority: &str, tenant_id: &str) -> Result<Url> {
    let authority = authority.trim_end_matches('/');
    Ok(Url::parse(&format!(
        "{authority}/{tenant_id}/oauth2/v2.0/token"
    ))?)
}
