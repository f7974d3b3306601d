use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use url::form_urlencoded;

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Employee {
    pub employee_number: String,
    pub first_name: String,
    pub last_name: String,
    pub date_inserted: DateTime<Utc>,
}

impl Employee {
    /// Builds a new record stamped with the current time.
    pub fn new(employee_number: String, first_name: String, last_name: String) -> Self {
        Self {
            employee_number,
            first_name,
            last_name,
            date_inserted: Utc::now(),
        }
    }

    /// Employee number encoded for use as a query value.
    pub fn number_query_value(&self) -> String {
        form_urlencoded::byte_serialize(self.employee_number.as_bytes()).collect()
    }

    pub fn inserted_display(&self) -> String {
        self.date_inserted.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    }
}
