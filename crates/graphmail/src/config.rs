//! Graph application settings.

use crate::error::{Error, Result};
use serde::Deserialize;

/// Registered-application settings for the Graph mail API.
///
/// Typically deserialized from a `graph` section of the host application's
/// configuration; [`GraphSettings::from_env`] covers deployments that pass
/// credentials through the environment instead.
#[derive(Clone, Deserialize)]
pub struct GraphSettings {
    /// Directory (tenant) id of the application registration.
    pub tenant_id: String,
    /// Application (client) id.
    pub client_id: String,
    /// Client secret.
    pub client_secret: String,
}

impl GraphSettings {
    /// Creates settings from the three credential values.
    #[must_use]
    pub fn new(
        tenant_id: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Reads settings from `GRAPH_TENANT_ID`, `GRAPH_CLIENT_ID`, and
    /// `GRAPH_CLIENT_SECRET`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] naming the first variable that is
    /// not set.
    pub fn from_env() -> Result<Self> {
        let var = |name: &str| {
            std::env::var(name)
                .map_err(|_| Error::Configuration(format!("{name} is not set")))
        };
        Ok(Self {
            tenant_id: var("GRAPH_TENANT_ID")?,
            client_id: var("GRAPH_CLIENT_ID")?,
            client_secret: var("GRAPH_CLIENT_SECRET")?,
        })
    }

    /// Checks that all three values are present and non-blank.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] naming the first missing field.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("tenant_id", &self.tenant_id),
            ("client_id", &self.client_id),
            ("client_secret", &self.client_secret),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Configuration(format!(
                    "Graph credentials are missing: {name} is blank"
                )));
            }
        }
        Ok(())
    }
}

// Keep the secret out of logs.
impl std::fmt::Debug for GraphSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphSettings")
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_settings() {
        let settings = GraphSettings::new("tenant", "client", "secret");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_blank_client_secret() {
        let settings = GraphSettings::new("tenant", "client", "");
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, Error::Configuration(msg) if msg.contains("client_secret")));
    }

    #[test]
    fn test_whitespace_client_id() {
        let settings = GraphSettings::new("tenant", "  ", "secret");
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, Error::Configuration(msg) if msg.contains("client_id")));
    }

    #[test]
    fn test_deserialize() {
        let settings: GraphSettings = serde_json::from_str(
            r#"{"tenant_id":"t","client_id":"c","client_secret":"s"}"#,
        )
        .unwrap();
        assert_eq!(settings.tenant_id, "t");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let settings = GraphSettings::new("tenant", "client", "hunter2");
        assert!(!format!("{settings:?}").contains("hunter2"));
    }
}
