//! Fluent message builder

use crate::attachment::Attachment;
use crate::recipient::{parse_all, Recipient};
use crate::ValidationError;

/// A message that passed validation and can be handed to the sender
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub(crate) mailbox: String,
    pub(crate) subject: String,
    pub(crate) body_html: String,
    pub(crate) to: Vec<Recipient>,
    pub(crate) cc: Vec<Recipient>,
    pub(crate) bcc: Vec<Recipient>,
    pub(crate) attachments: Vec<Attachment>,
}

impl Message {
    /// Start building a message
    pub fn builder() -> MessageBuilder {
        MessageBuilder::new()
    }

    /// Mailbox (user id or principal name) the message is sent as
    pub fn mailbox(&self) -> &str {
        &self.mailbox
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body_html(&self) -> &str {
        &self.body_html
    }

    pub fn to(&self) -> &[Recipient] {
        &self.to
    }

    pub fn cc(&self) -> &[Recipient] {
        &self.cc
    }

    pub fn bcc(&self) -> &[Recipient] {
        &self.bcc
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }
}

/// Accumulates one message's worth of state through chained calls.
///
/// Setters may be called in any order. `to`, `cc` and `bcc` replace the
/// previous list; `attachment` and `attachments` append.
#[derive(Debug, Clone, Default)]
pub struct MessageBuilder {
    mailbox: Option<String>,
    subject: Option<String>,
    body_html: Option<String>,
    to: Vec<Recipient>,
    cc: Vec<Recipient>,
    bcc: Vec<Recipient>,
    attachments: Vec<Attachment>,
}

impl MessageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sending mailbox
    pub fn mailbox(mut self, mailbox: impl Into<String>) -> Self {
        self.mailbox = Some(mailbox.into());
        self
    }

    /// Set the To recipients from `"name:address"` or `"address"` entries
    pub fn to<I, S>(mut self, recipients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.to = parse_all(recipients);
        self
    }

    /// Set the CC recipients
    pub fn cc<I, S>(mut self, recipients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.cc = parse_all(recipients);
        self
    }

    /// Set the BCC recipients
    pub fn bcc<I, S>(mut self, recipients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.bcc = parse_all(recipients);
        self
    }

    /// Set the subject line
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the HTML body
    pub fn body(mut self, html: impl Into<String>) -> Self {
        self.body_html = Some(html.into());
        self
    }

    /// Add an attachment. The content is base64-encoded immediately.
    pub fn attachment(
        mut self,
        name: impl Into<String>,
        content_type: impl Into<String>,
        content: impl AsRef<[u8]>,
    ) -> Self {
        self.attachments
            .push(Attachment::new(name, content_type, content));
        self
    }

    /// Add several prepared attachments
    pub fn attachments(mut self, attachments: impl IntoIterator<Item = Attachment>) -> Self {
        self.attachments.extend(attachments);
        self
    }

    /// Check required properties and produce a sendable [`Message`]
    pub fn build(self) -> Result<Message, ValidationError> {
        let mailbox = non_empty(self.mailbox, "mailbox")?;
        if self.to.is_empty() {
            return Err(ValidationError::MissingField("to"));
        }
        let subject = non_empty(self.subject, "subject")?;
        let body_html = non_empty(self.body_html, "body")?;

        for (field, list) in [("to", &self.to), ("cc", &self.cc), ("bcc", &self.bcc)] {
            if list.iter().any(|r| r.address.is_empty()) {
                return Err(ValidationError::EmptyAddress { field });
            }
        }

        Ok(Message {
            mailbox,
            subject,
            body_html,
            to: self.to,
            cc: self.cc,
            bcc: self.bcc,
            attachments: self.attachments,
        })
    }
}

/// Whitespace-only counts as missing, as for configuration values
fn non_empty(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(ValidationError::MissingField(field))
}
