//! Record store adapter.
//!
//! Every record lives under one fixed partition (the "ancestor" key) and
//! reads always come back newest first by `date_inserted`. Employee numbers
//! are not unique; callers wanting a single record take the first result,
//! which is the most recently inserted match.

use async_trait::async_trait;

use crate::errors::StoreError;
use crate::models::employee::Employee;

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// All records in the partition, newest first.
    async fn list_all(&self) -> Result<Vec<Employee>, StoreError>;

    /// Exact matches on `employee_number`, newest first.
    async fn find_by_number(&self, number: &str) -> Result<Vec<Employee>, StoreError>;

    /// Persists the record under a new server-generated key.
    async fn save(&self, employee: &Employee) -> Result<(), StoreError>;
}
