use courier_adapters::{config::CourierSettings, email::PostmarkEmailClient, notify::TracingAlertSink};
use courier_application::{DispatchConfig, Dispatcher};
use courier_core::{Blacklist, Cleanup, Job, ProgressSink, SendError};
use tokio::task::JoinHandle;

use crate::helpers::ServiceError;

pub type PostmarkDispatcher<B, C, P> = Dispatcher<PostmarkEmailClient, B, C, P, TracingAlertSink<P>>;

/// Delivery stage of the conversion pipeline, wired to Postmark
pub struct NotificationService<B, C, P>
where
    B: Blacklist + Clone + 'static,
    C: Cleanup + Clone + 'static,
    P: ProgressSink + Clone + 'static,
{
    dispatcher: PostmarkDispatcher<B, C, P>,
}

impl<B, C, P> NotificationService<B, C, P>
where
    B: Blacklist + Clone + 'static,
    C: Cleanup + Clone + 'static,
    P: ProgressSink + Clone + 'static,
{
    /// Create the service from loaded settings and the pipeline's collaborators
    ///
    /// # Arguments
    /// * `settings` - Sender, Postmark and size settings
    /// * `blacklist` - Registry oversize sources are added to
    /// * `cleanup` - Finalizes jobs that were delivered
    /// * `progress` - Status channel back to the user, also used for failures
    pub fn new(
        settings: &CourierSettings,
        blacklist: B,
        cleanup: C,
        progress: P,
    ) -> Result<Self, ServiceError> {
        let http_client = reqwest::Client::builder()
            .timeout(settings.postmark.timeout())
            .build()?;

        let email_client = PostmarkEmailClient::new(
            settings.postmark.base_url.clone(),
            settings.postmark.server_token.clone(),
            http_client,
        );

        let config = DispatchConfig {
            sender: settings.sender.clone(),
            max_attachment_size: settings.max_attachment_size,
        };
        let alerts = TracingAlertSink::new(progress.clone());

        let dispatcher = Dispatcher::new(config, email_client, blacklist, cleanup, progress, alerts);

        Ok(Self { dispatcher })
    }

    /// Mail the converted file of `job` in the background
    pub fn send(&self, job: Job) -> JoinHandle<Result<(), SendError>> {
        tracing::info!(job_id = %job.id(), url = %job.url(), "Dispatching notification");
        self.dispatcher.send(job)
    }
}
