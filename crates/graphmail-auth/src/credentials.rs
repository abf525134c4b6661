//! Application credentials for the client-credentials grant

use crate::{ConfigError, ConfigResult};
use secrecy::{ExposeSecret, Secret};
use std::env;

/// Client credentials registered for the application in the tenant
#[derive(Debug, Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: Secret<String>,
    tenant_id: String,
}

impl Credentials {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        tenant_id: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: Secret::new(client_secret.into()),
            tenant_id: tenant_id.into(),
        }
    }

    /// Load credentials from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `CLIENT_ID` | Application (client) ID |
    /// | `CLIENT_SECRET` | Client secret value |
    /// | `TENANT_ID` | Directory (tenant) ID |
    ///
    /// All three are required. A variable set to an empty string counts as unset.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load credentials through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            client_id: required(&lookup, "CLIENT_ID")?,
            client_secret: Secret::new(required(&lookup, "CLIENT_SECRET")?),
            tenant_id: required(&lookup, "TENANT_ID")?,
        })
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        self.client_secret.expose_secret()
    }

    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }
}

/// Fetch a variable that must be present and non-empty
pub(crate) fn required<F>(lookup: &F, key: &'static str) -> ConfigResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_loads_all_three_variables() {
        let creds = Credentials::from_lookup(lookup_from(&[
            ("CLIENT_ID", "app-id"),
            ("CLIENT_SECRET", "s3cret"),
            ("TENANT_ID", "tenant"),
        ]))
        .unwrap();

        assert_eq!(creds.client_id(), "app-id");
        assert_eq!(creds.client_secret(), "s3cret");
        assert_eq!(creds.tenant_id(), "tenant");
    }

    #[test]
    fn test_missing_and_empty_are_rejected() {
        let err = Credentials::from_lookup(lookup_from(&[
            ("CLIENT_ID", "app-id"),
            ("TENANT_ID", "tenant"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Missing("CLIENT_SECRET")));

        let err = Credentials::from_lookup(lookup_from(&[
            ("CLIENT_ID", ""),
            ("CLIENT_SECRET", "s3cret"),
            ("TENANT_ID", "tenant"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Missing("CLIENT_ID")));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let creds = Credentials::new("app-id", "s3cret", "tenant");
        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("app-id"));
        assert!(!rendered.contains("s3cret"));
    }
}
