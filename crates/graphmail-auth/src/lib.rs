//! # graphmail-auth
//!
//! Client-credential (`OAuth2` `client_credentials` grant) token acquisition
//! for the Microsoft identity platform.
//!
//! Exchanges a `{tenant_id, client_id, client_secret}` registration for a
//! bearer token scoped to an API (typically
//! `https://graph.microsoft.com/.default`) and caches the token in-process
//! until shortly before it expires.
//!
//! ## Quick Start
//!
//! ```ignore
//! use graphmail_auth::{ClientCredentials, TokenProvider};
//!
//! let credentials = ClientCredentials::new("tenant-id", "client-id", "client-secret")?;
//! let provider = TokenProvider::new(credentials, "https://graph.microsoft.com/.default")?;
//!
//! let bearer = provider.bearer_token().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod credentials;
mod error;
mod provider;
mod token;

pub use credentials::ClientCredentials;
pub use error::{Error, Result};
pub use provider::{DEFAULT_AUTHORITY, TokenProvider};
pub use token::Token;
