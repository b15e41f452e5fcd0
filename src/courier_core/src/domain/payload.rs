/// Subject line of every notification
pub const SUBJECT: &str = "convert";

/// Largest attachment the email API accepts, in bytes
pub const MAX_ATTACHMENT_SIZE: u64 = 10_485_760;

/// Content type advertised for the converted file
pub const ATTACHMENT_CONTENT_TYPE: &str = "application/octet-stream";

/// One outgoing email, built once per send attempt and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationPayload {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text_body: String,
    pub attachments: Vec<Attachment>,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    pub name: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

// Attachments can be megabytes long, keep them out of logs.
impl std::fmt::Debug for Attachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attachment")
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .field("content_len", &self.content.len())
            .finish()
    }
}

impl NotificationPayload {
    /// Text body of the notification for a converted document
    pub fn text_body_for(title: &str, url: &url::Url) -> String {
        format!("Straight to your Kindle! {}: {}", title, url)
    }
}
