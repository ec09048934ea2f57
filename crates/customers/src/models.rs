use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored customer row. `id` is assigned by the database on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Customer[id={}, firstName='{}', lastName='{}']",
            self.id, self.first_name, self.last_name
        )
    }
}

/// A customer that has not been inserted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
}

impl NewCustomer {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_display() {
        let customer = Customer {
            id: 3,
            first_name: "Josh".to_string(),
            last_name: "Bloch".to_string(),
        };

        assert_eq!(
            customer.to_string(),
            "Customer[id=3, firstName='Josh', lastName='Bloch']"
        );
    }

    #[test]
    fn test_new_customer_full_name() {
        let customer = NewCustomer::new("Jeff", "Dean");
        assert_eq!(customer.full_name(), "Jeff Dean");
    }
}
