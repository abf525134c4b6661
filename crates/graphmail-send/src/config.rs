//! Configuration loaded from environment variables.

use graphmail_auth::{microsoft, ConfigError, ConfigResult, Credentials};
use std::env;
use std::time::Duration;
use url::Url;

/// Microsoft Graph v1.0 endpoint
pub const GRAPH_API_BASE: &str = "https://graph.microsoft.com/v1.0";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Everything a [`MailSender`](crate::MailSender) needs, validated once
#[derive(Debug, Clone)]
pub struct SenderConfig {
    /// Application credentials
    pub credentials: Credentials,
    /// Identity platform host the token is requested from
    pub authority_host: Url,
    /// Graph API base, `/users/{mailbox}/sendMail` is appended to it
    pub api_base: Url,
    /// Timeout applied to each of the two requests
    pub timeout: Duration,
}

impl SenderConfig {
    /// Configuration for the public cloud with default timeouts
    pub fn new(credentials: Credentials) -> ConfigResult<Self> {
        Ok(Self {
            credentials,
            authority_host: parse_endpoint("GRAPH_AUTHORITY_HOST", microsoft::AUTHORITY_HOST)?,
            api_base: parse_endpoint("GRAPH_API_BASE", GRAPH_API_BASE)?,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `CLIENT_ID` | Application (client) ID | (required) |
    /// | `CLIENT_SECRET` | Client secret value | (required) |
    /// | `TENANT_ID` | Directory (tenant) ID | (required) |
    /// | `GRAPH_API_BASE` | Graph API base URL | `https://graph.microsoft.com/v1.0` |
    /// | `GRAPH_AUTHORITY_HOST` | Token authority host | `https://login.microsoftonline.com` |
    /// | `GRAPH_TIMEOUT_SECS` | Per-request timeout in seconds | `30` |
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credentials = Credentials::from_lookup(&lookup)?;

        let authority_host = parse_endpoint(
            "GRAPH_AUTHORITY_HOST",
            &optional(&lookup, "GRAPH_AUTHORITY_HOST")
                .unwrap_or_else(|| microsoft::AUTHORITY_HOST.to_string()),
        )?;

        let api_base = parse_endpoint(
            "GRAPH_API_BASE",
            &optional(&lookup, "GRAPH_API_BASE").unwrap_or_else(|| GRAPH_API_BASE.to_string()),
        )?;

        let timeout = match optional(&lookup, "GRAPH_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                    var: "GRAPH_TIMEOUT_SECS",
                    reason: format!("expected a whole number of seconds, got {:?}", raw),
                })?;
                if secs == 0 {
                    return Err(ConfigError::Invalid {
                        var: "GRAPH_TIMEOUT_SECS",
                        reason: "must be greater than zero".to_string(),
                    });
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            credentials,
            authority_host,
            api_base,
            timeout,
        })
    }

    pub fn with_authority_host(mut self, authority_host: Url) -> Self {
        self.authority_host = authority_host;
        self
    }

    pub fn with_api_base(mut self, api_base: Url) -> Self {
        self.api_base = api_base;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn optional<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|value| !value.trim().is_empty())
}

/// Endpoints must be absolute http(s) URLs that can take path segments
fn parse_endpoint(var: &'static str, raw: &str) -> ConfigResult<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::Invalid {
        var,
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ConfigError::Invalid {
            var,
            reason: format!("{} is not an http(s) base URL", url),
        });
    }

    Ok(url)
}
