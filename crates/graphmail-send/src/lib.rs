//! Microsoft Graph mail sending for GraphMail
//!
//! Build a message with [`MessageBuilder`], then hand it to a [`MailSender`]:
//!
//! ```no_run
//! # async fn run() -> Result<(), graphmail_auth::ConfigError> {
//! use graphmail_send::{MailSender, Message};
//!
//! let sender = MailSender::from_env()?;
//! let result = sender
//!     .send(
//!         Message::builder()
//!             .mailbox("noreply@contoso.com")
//!             .to(["Jane Doe:jane@contoso.com"])
//!             .subject("Quarterly report")
//!             .body("<p>Attached.</p>")
//!             .attachment("report.csv", "text/csv", "q,total\n3,42\n"),
//!     )
//!     .await;
//! assert!(result.success, "{:?}", result.error_message);
//! # Ok(())
//! # }
//! ```

mod attachment;
mod config;
mod envelope;
mod error;
mod message;
mod recipient;
mod sender;

pub use attachment::Attachment;
pub use config::{SenderConfig, GRAPH_API_BASE};
pub use envelope::{SendMailRequest, FILE_ATTACHMENT_ODATA_TYPE};
pub use error::{MailResult, SendError, ValidationError};
pub use message::{Message, MessageBuilder};
pub use recipient::Recipient;
pub use sender::{MailSender, SendResult, SendStatus};
