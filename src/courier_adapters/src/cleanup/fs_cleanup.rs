use courier_core::{Cleanup, CleanupError, Job};

/// Deletes the converted file once it has been mailed
#[derive(Debug, Default, Clone)]
pub struct FsCleanup;

impl FsCleanup {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl Cleanup for FsCleanup {
    #[tracing::instrument(name = "FsCleanup::clean", skip_all, fields(job_id = %job.id()))]
    async fn clean(&self, job: &Job) -> Result<(), CleanupError> {
        match tokio::fs::remove_file(job.file_path()).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("Converted file already gone");
                Ok(())
            }
            Err(source) => Err(CleanupError::Io {
                path: job.file_path().display().to_string(),
                source,
            }),
        }
    }
}
