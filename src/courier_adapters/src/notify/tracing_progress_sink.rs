use courier_core::{Job, ProgressSink};

/// Progress sink that only logs, for deployments without a user channel
#[derive(Debug, Default, Clone)]
pub struct TracingProgressSink;

impl TracingProgressSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl ProgressSink for TracingProgressSink {
    async fn progress(&self, job: &Job, status: &str) {
        tracing::info!(job_id = %job.id(), url = %job.url(), status, "Job progress");
    }
}
