use thiserror::Error;
use url::Url;

use crate::ports::services::TransportError;

/// Messages surfaced to the user who requested the conversion
pub mod messages {
    pub const SENDING_FAILED: &str = "Sorry, email sending failed.";
    pub const TOO_BIG: &str = "Sorry, this article is too big to send!";
    pub const INVALID_EMAIL: &str =
        "Your email appears invalid. Please try carefully remaking the bookmarklet.";
    pub const DONE: &str = "All done! Grab your Kindle and hang tight!";
}

/// Whether a failure is an engineering problem or something the user can act on.
///
/// The kind only decides which message the user sees, every failure is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Fatal,
    Friendly,
}

/// Why delivering a job's notification failed
#[derive(Debug, Error)]
pub enum SendError {
    #[error("Converted file is missing at {path}: {source}")]
    AttachmentMissing {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed reading file {path}: {source}")]
    AttachmentRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("URL {url} is too big ({size} bytes)")]
    TooBig { url: Url, size: u64 },
    #[error("Invalid email given: {0}")]
    InvalidRecipient(String),
    #[error("Postmark failed: {0}")]
    Transport(#[from] TransportError),
    #[error("Unknown error code from Postmark: {code}, {body}")]
    UnknownErrorCode { code: i64, body: String },
    #[error("Send task aborted: {0}")]
    Aborted(String),
}

impl SendError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::TooBig { .. } | Self::InvalidRecipient(_) => FailureKind::Friendly,
            _ => FailureKind::Fatal,
        }
    }

    /// The message to show the user, distinct from the diagnostic `Display`
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::TooBig { .. } => messages::TOO_BIG,
            Self::InvalidRecipient(_) => messages::INVALID_EMAIL,
            _ => messages::SENDING_FAILED,
        }
    }
}
