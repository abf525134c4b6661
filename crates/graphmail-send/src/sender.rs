//! Microsoft Graph API email sending
//!
//! Sends one message per call via POST /users/{mailbox}/sendMail. Each send
//! fetches a fresh client-credentials token first; nothing is retried.

use crate::envelope::SendMailRequest;
use crate::{MailResult, Message, MessageBuilder, SendError, SenderConfig};
use graphmail_auth::{ConfigError, ConfigResult, Credentials, TokenProvider};
use tracing::{debug, info, warn};
use url::Url;

/// Outcome of a send, as reported to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendResult {
    /// Whether the sendMail request completed
    pub success: bool,
    /// Why the send did not happen, when it did not
    pub error_message: Option<String>,
    /// HTTP status of the sendMail response, when one was received
    pub status: Option<u16>,
}

impl SendResult {
    fn failed(err: &SendError) -> Self {
        Self {
            success: false,
            error_message: Some(err.to_string()),
            status: None,
        }
    }
}

impl From<MailResult<SendStatus>> for SendResult {
    fn from(result: MailResult<SendStatus>) -> Self {
        match result {
            Ok(status) => Self {
                success: true,
                error_message: None,
                status: Some(status.code),
            },
            Err(err) => Self::failed(&err),
        }
    }
}

/// Response status of a completed sendMail request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendStatus {
    pub code: u16,
}

impl SendStatus {
    /// Any 2xx; Graph answers 202 Accepted when it queued the message
    pub fn is_accepted(&self) -> bool {
        (200..300).contains(&self.code)
    }
}

/// Sends messages as a mailbox of the configured tenant
#[derive(Debug, Clone)]
pub struct MailSender {
    client: reqwest::Client,
    credentials: Credentials,
    tokens: TokenProvider,
    api_base: Url,
}

impl MailSender {
    pub fn new(config: SenderConfig) -> ConfigResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        let tokens = TokenProvider::new()
            .with_authority_host(config.authority_host)
            .with_timeout(config.timeout);

        Ok(Self {
            client,
            credentials: config.credentials,
            tokens,
            api_base: config.api_base,
        })
    }

    /// Build a sender from `CLIENT_ID`, `CLIENT_SECRET`, `TENANT_ID` and the
    /// optional `GRAPH_*` overrides
    pub fn from_env() -> ConfigResult<Self> {
        Self::new(SenderConfig::from_env()?)
    }

    /// Validate, authenticate and send. Never panics and never retries.
    pub async fn send(&self, message: MessageBuilder) -> SendResult {
        self.try_send(message).await.into()
    }

    /// Like [`send`](Self::send) but with a typed error
    pub async fn try_send(&self, message: MessageBuilder) -> MailResult<SendStatus> {
        let message = message.build()?;
        self.deliver(&message).await
    }

    /// Send an already validated message
    pub async fn deliver(&self, message: &Message) -> MailResult<SendStatus> {
        let url = self.send_mail_url(message.mailbox())?;
        let token = self.tokens.fetch_token(&self.credentials).await?;

        info!(mailbox = message.mailbox(), "Sending email via Microsoft Graph API");
        debug!(
            to = message.to().len(),
            cc = message.cc().len(),
            bcc = message.bcc().len(),
            attachments = message.attachments().len(),
            "Graph sendMail recipients"
        );

        let response = self
            .client
            .post(url)
            .bearer_auth(token.secret())
            .json(&SendMailRequest::from(message))
            .send()
            .await?;

        let status = SendStatus {
            code: response.status().as_u16(),
        };

        if status.is_accepted() {
            info!(status = status.code, "Email sent via Graph API");
        } else {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.code, body = %body, "Graph API answered sendMail with a non-success status");
        }

        Ok(status)
    }

    /// `{api_base}/users/{mailbox}/sendMail` with the mailbox as one encoded segment
    fn send_mail_url(&self, mailbox: &str) -> MailResult<Url> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| SendError::InvalidEndpoint(self.api_base.to_string()))?
            .pop_if_empty()
            .extend(["users", mailbox, "sendMail"]);
        Ok(url)
    }
}
