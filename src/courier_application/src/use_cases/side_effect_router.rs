use courier_core::{
    Blacklist, Cleanup, ClientError, Job, ProgressSink, ResponseClass, SendError, messages,
};

/// Triggers the single terminal action that follows a delivery attempt
pub struct SideEffectRouter<'a, B, C, P>
where
    B: Blacklist,
    C: Cleanup,
    P: ProgressSink,
{
    blacklist: &'a B,
    cleanup: &'a C,
    progress: &'a P,
}

impl<'a, B, C, P> SideEffectRouter<'a, B, C, P>
where
    B: Blacklist,
    C: Cleanup,
    P: ProgressSink,
{
    pub fn new(blacklist: &'a B, cleanup: &'a C, progress: &'a P) -> Self {
        Self {
            blacklist,
            cleanup,
            progress,
        }
    }

    /// Act on a classified API response.
    ///
    /// Only `Success` cleans up. A failing cleanup is logged, the email is
    /// already on its way so the delivery still counts.
    #[tracing::instrument(name = "SideEffectRouter::route", skip(self, job), fields(job_id = %job.id()))]
    pub async fn route(&self, job: &Job, class: ResponseClass) -> Result<(), SendError> {
        match class {
            ResponseClass::Success => {
                self.progress.progress(job, messages::DONE).await;
                if let Err(e) = self.cleanup.clean(job).await {
                    tracing::warn!(error = %e, "Cleanup after delivery failed");
                }
                Ok(())
            }
            ResponseClass::KnownClientError(ClientError::InvalidEmail) => {
                Err(SendError::InvalidRecipient(job.email().to_string()))
            }
            ResponseClass::UnknownError { code, body } => {
                Err(SendError::UnknownErrorCode { code, body })
            }
        }
    }

    /// Blacklist the source of an attachment too large to send
    #[tracing::instrument(name = "SideEffectRouter::route_oversize", skip(self, job), fields(job_id = %job.id()))]
    pub async fn route_oversize(&self, job: &Job, size: u64) -> SendError {
        if let Err(e) = self.blacklist.add(job.url()).await {
            tracing::warn!(error = %e, url = %job.url(), "Blacklisting oversize URL failed");
        }

        SendError::TooBig {
            url: job.url().clone(),
            size,
        }
    }
}
