use async_trait::async_trait;
use thiserror::Error;
use url::Url;

use crate::domain::job::Job;

// Blacklist port trait and errors
#[derive(Debug, Error)]
pub enum BlacklistError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Registry of source URLs that are not processed again
#[async_trait]
pub trait Blacklist: Send + Sync {
    async fn add(&self, url: &Url) -> Result<(), BlacklistError>;
    async fn contains(&self, url: &Url) -> Result<bool, BlacklistError>;
}

// Cleanup port trait and errors
#[derive(Debug, Error)]
pub enum CleanupError {
    #[error("Failed to clean up {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Finalizes a job whose notification was delivered
#[async_trait]
pub trait Cleanup: Send + Sync {
    async fn clean(&self, job: &Job) -> Result<(), CleanupError>;
}
