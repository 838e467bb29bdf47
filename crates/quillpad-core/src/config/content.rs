//! Content presentation configuration.

use serde::{Deserialize, Serialize};

/// Settings governing how post lists are paginated and cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Default number of posts per page across all feeds.
    #[serde(default = "default_posts_per_page")]
    pub posts_per_page: u64,
    /// TTL for the cached index feed in seconds.
    #[serde(default = "default_index_cache_ttl")]
    pub index_cache_ttl_seconds: u64,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            posts_per_page: default_posts_per_page(),
            index_cache_ttl_seconds: default_index_cache_ttl(),
        }
    }
}

fn default_posts_per_page() -> u64 {
    10
}

fn default_index_cache_ttl() -> u64 {
    20
}
