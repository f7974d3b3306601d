use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::EmployeeStore;
use crate::errors::StoreError;
use crate::models::employee::Employee;

/// In-process store used when no database is configured.
///
/// Records are kept per partition in insertion order, keyed by a generated
/// `Uuid` the same way the Postgres table is.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    partition: String,
    records: Arc<RwLock<HashMap<String, Vec<(Uuid, Employee)>>>>,
}

impl MemoryStore {
    pub fn new(partition: impl Into<String>) -> Self {
        Self {
            partition: partition.into(),
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    async fn select<F>(&self, keep: F) -> Vec<Employee>
    where
        F: Fn(&Employee) -> bool,
    {
        let records = self.records.read().await;
        let mut found: Vec<Employee> = records
            .get(&self.partition)
            .map(|rows| {
                // Walk newest insertion first so the stable sort breaks
                // timestamp ties toward the later insert.
                rows.iter()
                    .rev()
                    .filter(|(_, e)| keep(e))
                    .map(|(_, e)| e.clone())
                    .collect()
            })
            .unwrap_or_default();
        found.sort_by(|a, b| b.date_inserted.cmp(&a.date_inserted));
        found
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Employee>, StoreError> {
        Ok(self.select(|_| true).await)
    }

    async fn find_by_number(&self, number: &str) -> Result<Vec<Employee>, StoreError> {
        Ok(self.select(|e| e.employee_number == number).await)
    }

    async fn save(&self, employee: &Employee) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        records
            .entry(self.partition.clone())
            .or_default()
            .push((Uuid::new_v4(), employee.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn employee_at(number: &str, first: &str, offset_secs: i64) -> Employee {
        Employee {
            employee_number: number.to_string(),
            first_name: first.to_string(),
            last_name: "Lee".to_string(),
            date_inserted: Utc::now() + Duration::seconds(offset_secs),
        }
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let store = MemoryStore::new("test");
        store.save(&employee_at("E1", "Old", -20)).await.unwrap();
        store.save(&employee_at("E2", "Newest", 0)).await.unwrap();
        store.save(&employee_at("E3", "Middle", -10)).await.unwrap();

        let names: Vec<String> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.first_name)
            .collect();
        assert_eq!(names, vec!["Newest", "Middle", "Old"]);
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store = MemoryStore::new("test");
        assert!(store.list_all().await.unwrap().is_empty());
        assert!(store.find_by_number("E1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_by_number_is_exact_and_most_recent_first() {
        let store = MemoryStore::new("test");
        store.save(&employee_at("E1", "First", -5)).await.unwrap();
        store.save(&employee_at("E10", "Other", 0)).await.unwrap();
        store.save(&employee_at("E1", "Second", 0)).await.unwrap();

        let found = store.find_by_number("E1").await.unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].first_name, "Second");
        assert_eq!(found[1].first_name, "First");
    }

    #[tokio::test]
    async fn equal_timestamps_prefer_later_insert() {
        let store = MemoryStore::new("test");
        let when = Utc::now();
        let mut first = employee_at("E1", "First", 0);
        first.date_inserted = when;
        let mut second = employee_at("E1", "Second", 0);
        second.date_inserted = when;
        store.save(&first).await.unwrap();
        store.save(&second).await.unwrap();

        let found = store.find_by_number("E1").await.unwrap();
        assert_eq!(found[0].first_name, "Second");
    }

    #[tokio::test]
    async fn empty_fields_are_stored_as_is() {
        let store = MemoryStore::new("test");
        store.save(&Employee::new(String::new(), String::new(), String::new())).await.unwrap();

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].employee_number, "");
        assert_eq!(store.find_by_number("").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn partitions_do_not_share_records() {
        let shared = MemoryStore::new("a");
        let other = MemoryStore {
            partition: "b".to_string(),
            records: shared.records.clone(),
        };
        shared.save(&employee_at("E1", "Ana", 0)).await.unwrap();

        assert_eq!(shared.list_all().await.unwrap().len(), 1);
        assert!(other.list_all().await.unwrap().is_empty());
    }
}
