//! Microsoft Graph `sendMail` request body
//!
//! Optional collections are left out of the JSON entirely when empty.

use crate::attachment::Attachment;
use crate::message::Message;
use crate::recipient::Recipient;
use serde::Serialize;

/// OData type marker for inline file attachments
pub const FILE_ATTACHMENT_ODATA_TYPE: &str = "#microsoft.graph.fileAttachment";

#[derive(Debug, Serialize)]
pub struct SendMailRequest<'a> {
    message: GraphMessage<'a>,
}

#[derive(Debug, Serialize)]
struct GraphMessage<'a> {
    subject: &'a str,
    body: GraphBody<'a>,
    #[serde(rename = "toRecipients")]
    to_recipients: Vec<GraphRecipient<'a>>,
    #[serde(rename = "ccRecipients", skip_serializing_if = "Vec::is_empty")]
    cc_recipients: Vec<GraphRecipient<'a>>,
    #[serde(rename = "bccRecipients", skip_serializing_if = "Vec::is_empty")]
    bcc_recipients: Vec<GraphRecipient<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<GraphAttachment<'a>>,
}

#[derive(Debug, Serialize)]
struct GraphBody<'a> {
    #[serde(rename = "contentType")]
    content_type: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct GraphRecipient<'a> {
    #[serde(rename = "emailAddress")]
    email_address: GraphEmailAddress<'a>,
}

#[derive(Debug, Serialize)]
struct GraphEmailAddress<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    address: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphAttachment<'a> {
    #[serde(rename = "@odata.type")]
    odata_type: &'static str,
    name: &'a str,
    content_type: &'a str,
    content_bytes: &'a str,
}

impl<'a> From<&'a Recipient> for GraphRecipient<'a> {
    fn from(recipient: &'a Recipient) -> Self {
        Self {
            email_address: GraphEmailAddress {
                name: recipient.name.as_deref(),
                address: &recipient.address,
            },
        }
    }
}

impl<'a> From<&'a Attachment> for GraphAttachment<'a> {
    fn from(att: &'a Attachment) -> Self {
        Self {
            odata_type: FILE_ATTACHMENT_ODATA_TYPE,
            name: &att.name,
            content_type: &att.content_type,
            content_bytes: &att.content_bytes,
        }
    }
}

impl<'a> From<&'a Message> for SendMailRequest<'a> {
    fn from(message: &'a Message) -> Self {
        Self {
            message: GraphMessage {
                subject: &message.subject,
                body: GraphBody {
                    content_type: "HTML",
                    content: &message.body_html,
                },
                to_recipients: message.to.iter().map(Into::into).collect(),
                cc_recipients: message.cc.iter().map(Into::into).collect(),
                bcc_recipients: message.bcc.iter().map(Into::into).collect(),
                attachments: message.attachments.iter().map(Into::into).collect(),
            },
        }
    }
}
