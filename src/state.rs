use std::sync::Arc;

use log::{info, warn};

use crate::cache::{EmployeeCache, MemoryCache, NullCache};
use crate::config::{CacheBackend, Config};
use crate::db;
use crate::errors::StoreError;
use crate::store::{EmployeeStore, MemoryStore, PgStore};

/// Backends shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EmployeeStore>,
    pub cache: Arc<dyn EmployeeCache>,
}

impl AppState {
    pub fn new(store: Arc<dyn EmployeeStore>, cache: Arc<dyn EmployeeCache>) -> Self {
        Self { store, cache }
    }

    pub async fn from_config(config: &Config) -> Result<Self, StoreError> {
        let store: Arc<dyn EmployeeStore> = match &config.database_url {
            Some(url) => {
                let pool = db::create_pool(url, config.db_max_connections).await?;
                info!("Using Postgres record store, partition '{}'", config.partition_key);
                Arc::new(PgStore::new(pool, config.partition_key.clone()))
            }
            None => {
                warn!("DATABASE_URL not set, records are kept in memory only");
                Arc::new(MemoryStore::new(config.partition_key.clone()))
            }
        };

        let cache: Arc<dyn EmployeeCache> = match config.cache_backend {
            CacheBackend::Memory => Arc::new(MemoryCache::new(config.cache_ttl)),
            CacheBackend::Disabled => {
                info!("Employee cache disabled");
                Arc::new(NullCache)
            }
        };

        Ok(Self::new(store, cache))
    }
}
