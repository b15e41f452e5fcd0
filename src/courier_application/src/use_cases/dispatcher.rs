use std::{any::Any, panic::AssertUnwindSafe, sync::Arc};

pub use courier_core::domain::payload::MAX_ATTACHMENT_SIZE;
use courier_core::{
    AlertSink, Blacklist, Cleanup, FailureKind, Job, MailTransport, ProgressSink, SendError,
};
use futures::FutureExt;
use tokio::task::JoinHandle;

use crate::use_cases::{
    payload_builder::PayloadBuilder, response_interpreter::interpret,
    side_effect_router::SideEffectRouter,
};

/// Settings the dispatcher needs, built once at startup
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    pub sender: String,
    pub max_attachment_size: u64,
}

impl DispatchConfig {
    pub fn new(sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            max_attachment_size: MAX_ATTACHMENT_SIZE,
        }
    }
}

/// Mails converted documents to the users who requested them.
///
/// Each [`send`](Self::send) runs as its own task. Failures are reported to the
/// [`AlertSink`] from inside that task and never reach the caller or other sends.
///
/// # Note on Architecture
/// Collaborators implement Clone via internal Arc for sharing between tasks.
#[derive(Clone)]
pub struct Dispatcher<T, B, C, P, A>
where
    T: MailTransport,
    B: Blacklist,
    C: Cleanup,
    P: ProgressSink,
    A: AlertSink,
{
    config: Arc<DispatchConfig>,
    transport: T,
    blacklist: B,
    cleanup: C,
    progress: P,
    alerts: A,
}

impl<T, B, C, P, A> Dispatcher<T, B, C, P, A>
where
    T: MailTransport + Clone + 'static,
    B: Blacklist + Clone + 'static,
    C: Cleanup + Clone + 'static,
    P: ProgressSink + Clone + 'static,
    A: AlertSink + Clone + 'static,
{
    pub fn new(
        config: DispatchConfig,
        transport: T,
        blacklist: B,
        cleanup: C,
        progress: P,
        alerts: A,
    ) -> Self {
        Self {
            config: Arc::new(config),
            transport,
            blacklist,
            cleanup,
            progress,
            alerts,
        }
    }

    /// Deliver `job` in the background and return immediately.
    ///
    /// The handle may be dropped. Awaiting it yields the outcome after it has
    /// already been reported.
    pub fn send(&self, job: Job) -> JoinHandle<Result<(), SendError>> {
        let dispatcher = self.clone();
        tokio::spawn(async move { dispatcher.supervise(job).await })
    }

    /// Run one delivery, turning a panic into a fatal failure and reporting
    /// any failure to the alert sink.
    async fn supervise(&self, job: Job) -> Result<(), SendError> {
        let result = match AssertUnwindSafe(self.deliver(&job)).catch_unwind().await {
            Ok(result) => result,
            Err(panic) => Err(SendError::Aborted(panic_message(panic.as_ref()))),
        };

        if let Err(error) = &result {
            match error.kind() {
                FailureKind::Fatal => {
                    tracing::error!(job_id = %job.id(), url = %job.url(), error = %error, "Notification failed")
                }
                FailureKind::Friendly => {
                    tracing::warn!(job_id = %job.id(), url = %job.url(), error = %error, "Notification refused")
                }
            }
            self.alerts.alert(&job, error).await;
        }

        result
    }

    /// Deliver `job` inline: size gate, payload, transmit, interpret, route
    #[tracing::instrument(
        name = "Dispatcher::deliver",
        skip_all,
        fields(job_id = %job.id(), url = %job.url())
    )]
    pub async fn deliver(&self, job: &Job) -> Result<(), SendError> {
        let size = tokio::fs::metadata(job.file_path())
            .await
            .map_err(|source| SendError::AttachmentMissing {
                path: job.file_path().display().to_string(),
                source,
            })?
            .len();

        let router = SideEffectRouter::new(&self.blacklist, &self.cleanup, &self.progress);

        if size > self.config.max_attachment_size {
            return Err(router.route_oversize(job, size).await);
        }

        let payload = PayloadBuilder::new(&self.config.sender).build(job).await?;
        let response = self.transport.transmit(payload).await?;
        tracing::debug!(error_code = ?response.error_code(), "Email API answered");

        router.route(job, interpret(&response)).await
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
