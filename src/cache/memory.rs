use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::EmployeeCache;
use crate::errors::CacheError;
use crate::models::employee::Employee;

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Vec<u8>,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn new(value: Vec<u8>, ttl: Option<Duration>) -> Self {
        let expires_at = ttl.map(|d| Instant::now() + d);
        Self { value, expires_at }
    }

    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| Instant::now() >= exp)
    }
}

/// Shared in-process cache holding JSON-encoded employees.
///
/// Expiry is lazy: an expired entry reads as a miss and is dropped on the
/// next write to the same key.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<RwLock<HashMap<String, CacheEntry>>>,
    ttl: Option<Duration>,
}

impl MemoryCache {
    pub fn new(ttl: Option<Duration>) -> Self {
        Self {
            store: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }
}

#[async_trait]
impl EmployeeCache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Employee>, CacheError> {
        let store = self.store.read().await;

        match store.get(key) {
            Some(entry) if entry.is_expired() => Ok(None),
            Some(entry) => Ok(Some(serde_json::from_slice(&entry.value)?)),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &Employee) -> Result<(), CacheError> {
        let encoded = serde_json::to_vec(value)?;
        let mut store = self.store.write().await;
        store.insert(key.to_string(), CacheEntry::new(encoded, self.ttl));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> Employee {
        Employee::new("E1".into(), "Ana".into(), "Lee".into())
    }

    #[tokio::test]
    async fn set_then_get_returns_same_record() {
        let cache = MemoryCache::new(None);
        let employee = ana();

        cache.set("E1", &employee).await.unwrap();
        assert_eq!(cache.get("E1").await.unwrap(), Some(employee));
    }

    #[tokio::test]
    async fn unknown_key_is_a_miss() {
        let cache = MemoryCache::new(None);
        assert_eq!(cache.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn expired_entry_is_a_miss() {
        let cache = MemoryCache::new(Some(Duration::from_millis(10)));
        cache.set("E1", &ana()).await.unwrap();

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(cache.get("E1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_overwrites_previous_value() {
        let cache = MemoryCache::new(None);
        cache.set("E1", &ana()).await.unwrap();
        let newer = Employee::new("E1".into(), "Bea".into(), "Lee".into());
        cache.set("E1", &newer).await.unwrap();

        assert_eq!(cache.get("E1").await.unwrap().unwrap().first_name, "Bea");
    }

    #[tokio::test]
    async fn corrupt_entry_is_an_error_not_a_miss() {
        let cache = MemoryCache::new(None);
        cache
            .store
            .write()
            .await
            .insert("E1".to_string(), CacheEntry::new(b"not json".to_vec(), None));

        assert!(matches!(cache.get("E1").await, Err(CacheError::Codec(_))));
    }

    #[tokio::test]
    async fn clones_share_entries() {
        let cache = MemoryCache::new(None);
        let handle = cache.clone();
        cache.set("E1", &ana()).await.unwrap();

        assert!(handle.get("E1").await.unwrap().is_some());
    }
}
