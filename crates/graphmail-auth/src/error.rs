//! Error types for the auth module

use thiserror::Error;

/// Result type for auth operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while obtaining an access token
#[derive(Debug, Error)]
pub enum AuthError {
    /// The token endpoint answered with an OAuth2 error payload
    #[error("{}", rejected_message(.error, .description))]
    Rejected {
        error: String,
        description: Option<String>,
    },

    /// The token request could not be completed
    #[error("Network error: {0}")]
    Network(String),

    /// The token endpoint answered but no usable token was in the response
    #[error("No token defined: {0}")]
    MalformedResponse(String),

    /// The token endpoint did not answer in time
    #[error("Token request timed out")]
    Timeout,

    /// Token exchange failed for another reason
    #[error("Token exchange failed: {0}")]
    TokenExchangeFailed(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

fn rejected_message(error: &str, description: &Option<String>) -> String {
    description.clone().unwrap_or_else(|| error.to_string())
}

/// Errors raised while assembling configuration at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("{0} var is not defined")]
    Missing(&'static str),

    /// A variable is set but cannot be used
    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}
