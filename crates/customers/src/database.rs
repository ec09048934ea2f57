use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::debug;

use crate::errors::AppError;
use crate::models::{Customer, NewCustomer};

/// Column width used by `CREATE TABLE customers`.
pub const NAME_MAX_LEN: usize = 255;

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Drops and recreates the `customers` table.
    pub async fn reset_customers_table(&self) -> Result<(), AppError> {
        sqlx::query("DROP TABLE IF EXISTS customers")
            .execute(&self.pool)
            .await?;

        sqlx::query(
            r#"
            CREATE TABLE customers (
                id BIGSERIAL PRIMARY KEY,
                first_name VARCHAR(255),
                last_name VARCHAR(255)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Inserts all customers with a single multi-row statement.
    ///
    /// Every value is bound as a parameter. Returns the number of rows inserted.
    pub async fn insert_customers(&self, customers: &[NewCustomer]) -> Result<u64, AppError> {
        if customers.is_empty() {
            return Ok(0);
        }

        if let Some(too_long) = customers.iter().find(|c| {
            c.first_name.chars().count() > NAME_MAX_LEN
                || c.last_name.chars().count() > NAME_MAX_LEN
        }) {
            return Err(AppError::InvalidInput(format!(
                "name longer than {NAME_MAX_LEN} characters: {}",
                too_long.full_name()
            )));
        }

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO customers (first_name, last_name) ");
        builder.push_values(customers, |mut row, customer| {
            row.push_bind(customer.first_name.clone())
                .push_bind(customer.last_name.clone());
        });

        let result = builder.build().execute(&self.pool).await?;
        debug!("Inserted {} customer rows", result.rows_affected());

        Ok(result.rows_affected())
    }

    pub async fn find_customers_by_first_name(
        &self,
        first_name: &str,
    ) -> Result<Vec<Customer>, AppError> {
        let customers: Vec<Customer> = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name
            FROM customers
            WHERE first_name = $1
            "#,
        )
        .bind(first_name)
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    pub async fn list_customers(&self) -> Result<Vec<Customer>, AppError> {
        let customers: Vec<Customer> = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name
            FROM customers
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    pub async fn count_customers(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
