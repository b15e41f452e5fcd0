use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

use courier_core::{Blacklist, BlacklistError};
use url::Url;

#[derive(Default, Clone)]
pub struct HashSetBlacklist {
    urls: Arc<RwLock<HashSet<Url>>>,
}

impl HashSetBlacklist {
    pub fn new() -> Self {
        Self {
            urls: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.urls.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.urls.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl Blacklist for HashSetBlacklist {
    async fn add(&self, url: &Url) -> Result<(), BlacklistError> {
        self.urls.write().await.insert(url.clone());
        Ok(())
    }

    async fn contains(&self, url: &Url) -> Result<bool, BlacklistError> {
        Ok(self.urls.read().await.contains(url))
    }
}
