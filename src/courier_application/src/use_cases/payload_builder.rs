use courier_core::{
    Attachment, Job, NotificationPayload, SendError,
    domain::payload::{ATTACHMENT_CONTENT_TYPE, SUBJECT},
};

/// Builds the email for a job that already passed the size check
pub struct PayloadBuilder<'a> {
    sender: &'a str,
}

impl<'a> PayloadBuilder<'a> {
    pub fn new(sender: &'a str) -> Self {
        Self { sender }
    }

    /// Read the converted file and assemble the payload around it.
    ///
    /// The file was just stat'ed, so a read failure here is an I/O fault or a
    /// race with cleanup, reported as fatal.
    #[tracing::instrument(name = "PayloadBuilder::build", skip_all, fields(job_id = %job.id()))]
    pub async fn build(&self, job: &Job) -> Result<NotificationPayload, SendError> {
        let content =
            tokio::fs::read(job.file_path())
                .await
                .map_err(|source| SendError::AttachmentRead {
                    path: job.file_path().display().to_string(),
                    source,
                })?;

        Ok(NotificationPayload {
            from: self.sender.to_string(),
            to: job.email().to_string(),
            subject: SUBJECT.to_string(),
            text_body: NotificationPayload::text_body_for(job.title(), job.url()),
            attachments: vec![Attachment {
                name: job.file_name().to_string(),
                content_type: ATTACHMENT_CONTENT_TYPE.to_string(),
                content,
            }],
        })
    }
}
