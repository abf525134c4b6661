//! OAuth2 client-credentials token exchange
//!
//! Every call performs one form-encoded POST against the tenant's token
//! endpoint. Nothing is cached: a token lives exactly as long as the
//! [`AccessToken`] value returned to the caller.

use crate::{microsoft, AuthError, AuthResult, Credentials};
use oauth2::{
    basic::{BasicClient, BasicErrorResponse},
    reqwest::async_http_client, AuthType, AuthUrl, ClientId, ClientSecret,
    RequestTokenError, Scope, TokenResponse, TokenUrl,
};
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Bearer token presented to Microsoft Graph
#[derive(Debug, Clone)]
pub struct AccessToken {
    value: Secret<String>,
}

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Secret::new(value.into()),
        }
    }

    /// The raw token, for the `Authorization` header
    pub fn secret(&self) -> &str {
        self.value.expose_secret()
    }
}

/// Exchanges [`Credentials`] for access tokens
#[derive(Debug, Clone)]
pub struct TokenProvider {
    authority_host: String,
    scope: String,
    timeout: Duration,
}

impl Default for TokenProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenProvider {
    /// Provider for the public cloud with the Graph `.default` scope
    pub fn new() -> Self {
        Self {
            authority_host: microsoft::AUTHORITY_HOST.to_string(),
            scope: microsoft::GRAPH_DEFAULT_SCOPE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Use another authority host (sovereign clouds, local test servers)
    pub fn with_authority_host(mut self, authority_host: Url) -> Self {
        self.authority_host = authority_host.to_string();
        self
    }

    /// Request a different scope
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    /// Upper bound on the whole token round trip
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn authority_host(&self) -> &str {
        &self.authority_host
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Fetch a fresh access token for the given credentials
    pub async fn fetch_token(&self, credentials: &Credentials) -> AuthResult<AccessToken> {
        let host = &self.authority_host;
        let token_url = microsoft::token_url(host, credentials.tenant_id())
            .map(TokenUrl::from_url)
            .map_err(|e| AuthError::InvalidConfig(format!("Invalid token URL: {}", e)))?;
        let auth_url = microsoft::authorize_url(host, credentials.tenant_id())
            .map(AuthUrl::from_url)
            .map_err(|e| AuthError::InvalidConfig(format!("Invalid auth URL: {}", e)))?;

        // Azure AD expects the secret in the form body rather than Basic auth
        let client = BasicClient::new(
            ClientId::new(credentials.client_id().to_string()),
            Some(ClientSecret::new(credentials.client_secret().to_string())),
            auth_url,
            Some(token_url),
        )
        .set_auth_type(AuthType::RequestBody);

        debug!(
            tenant = credentials.tenant_id(),
            scope = %self.scope,
            "Requesting client-credentials token"
        );

        let request = client
            .exchange_client_credentials()
            .add_scope(Scope::new(self.scope.clone()))
            .request_async(async_http_client);

        let response = tokio::time::timeout(self.timeout, request)
            .await
            .map_err(|_| AuthError::Timeout)?
            .map_err(|err| match err {
                RequestTokenError::ServerResponse(response) => rejected(&response),
                RequestTokenError::Request(e) => AuthError::Network(e.to_string()),
                // A 200 carrying an error payload fails token parsing
                RequestTokenError::Parse(e, body) => {
                    match serde_json::from_slice::<BasicErrorResponse>(&body) {
                        Ok(response) => rejected(&response),
                        Err(_) => AuthError::MalformedResponse(e.to_string()),
                    }
                }
                RequestTokenError::Other(msg) => AuthError::TokenExchangeFailed(msg),
            })?;

        let secret = response.access_token().secret();
        if secret.is_empty() {
            return Err(AuthError::MalformedResponse(
                "access_token is empty".to_string(),
            ));
        }

        info!(tenant = credentials.tenant_id(), "Obtained access token");
        Ok(AccessToken::new(secret.clone()))
    }
}

fn rejected(response: &BasicErrorResponse) -> AuthError {
    AuthError::Rejected {
        error: response.error().as_ref().to_string(),
        description: response.error_description().cloned(),
    }
}
