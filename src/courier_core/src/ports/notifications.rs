use async_trait::async_trait;

use crate::domain::{job::Job, send_error::SendError};

/// Sink for human-readable status updates about a job
#[async_trait]
pub trait ProgressSink: Send + Sync {
    async fn progress(&self, job: &Job, status: &str);
}

/// Sink for failed deliveries.
///
/// Implementations log the diagnostic and surface [`SendError::user_message`]
/// to the user.
#[async_trait]
pub trait AlertSink: Send + Sync {
    async fn alert(&self, job: &Job, error: &SendError);
}
