pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    api_response::{ApiResponse, ApiResponseError, ClientError, ResponseClass},
    job::Job,
    payload::{Attachment, NotificationPayload},
    send_error::{FailureKind, SendError, messages},
};

pub use ports::{
    notifications::{AlertSink, ProgressSink},
    repositories::{Blacklist, BlacklistError, Cleanup, CleanupError},
    services::{MailTransport, TransportError},
};
