use std::sync::Arc;

use courier_adapters::{config::RedisSettings, persistence::{RedisBlacklist, connect_redis}};
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("Failed to connect to Redis: {0}")]
    Redis(#[from] redis::RedisError),
}

/// Connect to the Redis instance named in the settings and wrap it as a blacklist
///
/// # Arguments
/// * `settings` - Redis section of the courier settings
///
/// # Returns
/// A blacklist sharing one connection between all sends
pub fn configure_redis_blacklist(settings: &RedisSettings) -> Result<RedisBlacklist, ServiceError> {
    let conn = connect_redis(&settings.host_name)?;
    Ok(RedisBlacklist::new(Arc::new(RwLock::new(conn))))
}
