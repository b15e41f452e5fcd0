use std::sync::Arc;

use courier_core::{Blacklist, BlacklistError};
use redis::{Commands, Connection};
use tokio::sync::RwLock;
use url::Url;

#[derive(Clone)]
pub struct RedisBlacklist {
    conn: Arc<RwLock<Connection>>,
}

impl RedisBlacklist {
    pub fn new(conn: Arc<RwLock<Connection>>) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl Blacklist for RedisBlacklist {
    async fn add(&self, url: &Url) -> Result<(), BlacklistError> {
        let key = get_key(url);

        let mut conn = self.conn.write().await;
        conn.set(key, true)
            .map_err(|e| BlacklistError::DatabaseError(e.to_string()))
    }

    async fn contains(&self, url: &Url) -> Result<bool, BlacklistError> {
        let key = get_key(url);
        let mut conn = self.conn.write().await;
        conn.exists(&key)
            .map_err(|e| BlacklistError::DatabaseError(e.to_string()))
    }
}

const BLACKLISTED_URL_KEY_PREFIX: &str = "blacklisted_url:";

fn get_key(url: &Url) -> String {
    format!("{}{}", BLACKLISTED_URL_KEY_PREFIX, url)
}

/// Open a blocking Redis connection to `redis_hostname`
pub fn connect(redis_hostname: &str) -> redis::RedisResult<Connection> {
    redis::Client::open(format!("redis://{}/", redis_hostname))?.get_connection()
}
