//! Error types for sending mail

use graphmail_auth::AuthError;
use thiserror::Error;

/// Result type for send operations
pub type MailResult<T> = Result<T, SendError>;

/// A message that cannot be sent as built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required property was never set or is empty
    #[error("[{0}] property is required.")]
    MissingField(&'static str),

    /// A recipient entry parsed to an empty address
    #[error("[{field}] contains a recipient without an address.")]
    EmptyAddress { field: &'static str },
}

/// Errors that can occur while sending a message
#[derive(Debug, Error)]
pub enum SendError {
    /// Rejected before any network call
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Token could not be obtained; the send POST was not attempted
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The sendMail request itself failed
    #[error("Graph API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The sendMail URL could not be built for this mailbox
    #[error("Invalid sendMail endpoint: {0}")]
    InvalidEndpoint(String),
}
