//! Authentication module for GraphMail
//!
//! Obtains application access tokens for Microsoft Graph through the OAuth2
//! client-credentials grant. Tokens are fetched on demand and never cached.

mod credentials;
mod error;
mod token;

pub use credentials::Credentials;
pub use error::{AuthError, AuthResult, ConfigError, ConfigResult};
pub use token::{AccessToken, TokenProvider};

/// Microsoft identity platform defaults
pub mod microsoft {
    use url::{ParseError, Url};

    /// Public-cloud authority host
    pub const AUTHORITY_HOST: &str = "https://login.microsoftonline.com";

    /// Scope requesting every application permission granted to the client
    pub const GRAPH_DEFAULT_SCOPE: &str = "https://graph.microsoft.com/.default";

    /// Token endpoint for a tenant on the given authority host
    pub fn token_url(authority_host: &str, tenant_id: &str) -> Result<Url, ParseError> {
        tenant_endpoint(authority_host, tenant_id, "token")
    }

    /// Authorization endpoint for a tenant. Unused by the client-credentials
    /// grant but required to build an OAuth2 client.
    pub fn authorize_url(authority_host: &str, tenant_id: &str) -> Result<Url, ParseError> {
        tenant_endpoint(authority_host, tenant_id, "authorize")
    }

    /// `{authority_host}/{tenant_id}/oauth2/v2.0/{leaf}` with the tenant as one encoded segment
    fn tenant_endpoint(authority_host: &str, tenant_id: &str, leaf: &str) -> Result<Url, ParseError> {
        let mut url = Url::parse(authority_host)?;
        url.path_segments_mut()
            .map_err(|_| ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend([tenant_id, "oauth2", "v2.0", leaf]);
        Ok(url)
    }
}
