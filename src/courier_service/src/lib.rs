mod helpers;
mod notification_service;

pub use helpers::{ServiceError, configure_redis_blacklist};
pub use notification_service::{NotificationService, PostmarkDispatcher};

// Re-export commonly used types
pub use courier_core::{AlertSink, Blacklist, Cleanup, Job, MailTransport, ProgressSink, SendError};
