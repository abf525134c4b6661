//! File attachments

use base64::Engine;

/// An attachment ready to go on the wire.
///
/// The content is base64-encoded when the attachment is created, so the raw
/// bytes are not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Filename to display
    pub name: String,
    /// MIME type (e.g., "application/pdf")
    pub content_type: String,
    /// Standard base64 of the file content
    pub content_bytes: String,
}

impl Attachment {
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        content: impl AsRef<[u8]>,
    ) -> Self {
        let engine = base64::engine::general_purpose::STANDARD;
        Self {
            name: name.into(),
            content_type: content_type.into(),
            content_bytes: engine.encode(content.as_ref()),
        }
    }
}
