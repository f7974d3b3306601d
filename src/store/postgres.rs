use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::EmployeeStore;
use crate::errors::StoreError;
use crate::models::employee::Employee;

/// Postgres-backed store. The partition is the `ancestor` column.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
    partition: String,
}

impl PgStore {
    pub fn new(pool: PgPool, partition: impl Into<String>) -> Self {
        Self {
            pool,
            partition: partition.into(),
        }
    }
}

#[async_trait]
impl EmployeeStore for PgStore {
    async fn list_all(&self) -> Result<Vec<Employee>, StoreError> {
        let employees = sqlx::query_as::<_, Employee>(
            "SELECT employee_number, first_name, last_name, date_inserted FROM employees \
             WHERE ancestor = $1 ORDER BY date_inserted DESC, seq DESC",
        )
        .bind(&self.partition)
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    async fn find_by_number(&self, number: &str) -> Result<Vec<Employee>, StoreError> {
        let employees = sqlx::query_as::<_, Employee>(
            "SELECT employee_number, first_name, last_name, date_inserted FROM employees \
             WHERE ancestor = $1 AND employee_number = $2 ORDER BY date_inserted DESC, seq DESC",
        )
        .bind(&self.partition)
        .bind(number)
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    async fn save(&self, employee: &Employee) -> Result<(), StoreError> {
        let key = Uuid::new_v4();

        sqlx::query(
            "INSERT INTO employees (key, ancestor, employee_number, first_name, last_name, date_inserted) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(key)
        .bind(&self.partition)
        .bind(&employee.employee_number)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(employee.date_inserted)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
