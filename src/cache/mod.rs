//! Cache adapter for single employee records, keyed by employee number.
//!
//! `Ok(None)` is the distinguished miss. Errors are reported separately so
//! callers can tell a broken backend from an absent entry.

use async_trait::async_trait;

use crate::errors::CacheError;
use crate::models::employee::Employee;

mod memory;

pub use memory::MemoryCache;

#[async_trait]
pub trait EmployeeCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Employee>, CacheError>;

    async fn set(&self, key: &str, value: &Employee) -> Result<(), CacheError>;
}

/// Cache that never holds anything. Used when caching is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCache;

#[async_trait]
impl EmployeeCache for NullCache {
    async fn get(&self, _key: &str) -> Result<Option<Employee>, CacheError> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: &Employee) -> Result<(), CacheError> {
        Ok(())
    }
}
