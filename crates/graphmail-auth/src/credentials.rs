//! Application credentials for the client-credential grant.

use crate::error::{Error, Result};

/// Tenant, client id, and client secret of a registered application.
///
/// All three values are required and must be non-blank; validation happens
/// at construction so a misconfigured deployment fails before any request
/// is attempted.
#[derive(Clone)]
pub struct ClientCredentials {
    tenant_id: String,
    client_id: String,
    client_secret: String,
}

impl ClientCredentials {
    /// Creates validated credentials.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] naming the first field that is
    /// missing or blank.
    pub fn new(
        tenant_id: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self> {
        let tenant_id = tenant_id.into();
        let client_id = client_id.into();
        let client_secret = client_secret.into();

        for (name, value) in [
            ("tenant_id", &tenant_id),
            ("client_id", &client_id),
            ("client_secret", &client_secret),
        ] {
            if value.trim().is_empty() {
                return Err(Error::InvalidConfig(format!("{name} is missing or blank")));
            }
        }

        Ok(Self {
            tenant_id,
            client_id,
            client_secret,
        })
    }

    /// Returns the tenant id.
    #[must_use]
    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    /// Returns the client id.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub(crate) fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

// Keep the secret out of logs.
impl std::fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}
