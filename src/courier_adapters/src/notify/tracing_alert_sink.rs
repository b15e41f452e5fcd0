use courier_core::{AlertSink, Job, ProgressSink, SendError};

/// Tells the user about a failed delivery through a [`ProgressSink`].
///
/// The dispatcher has already logged the failure by kind. This sink records
/// the full error chain at `debug` and forwards only the user message.
#[derive(Debug, Clone)]
pub struct TracingAlertSink<P> {
    progress: P,
}

impl<P> TracingAlertSink<P>
where
    P: ProgressSink,
{
    pub fn new(progress: P) -> Self {
        Self { progress }
    }
}

#[async_trait::async_trait]
impl<P> AlertSink for TracingAlertSink<P>
where
    P: ProgressSink,
{
    async fn alert(&self, job: &Job, error: &SendError) {
        tracing::debug!(
            job_id = %job.id(),
            kind = ?error.kind(),
            error = ?error,
            user_message = error.user_message(),
            "Reporting failure to user"
        );
        self.progress.progress(job, error.user_message()).await;
    }
}
