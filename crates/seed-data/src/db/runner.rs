//! The seed-and-query sequence.

use customers::{AppError, Customer, Database, NewCustomer};
use thiserror::Error;
use tracing::info;

use crate::config::SeedConfig;
use crate::names::{NameError, split_names};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Database(#[from] AppError),
    #[error(transparent)]
    Name(#[from] NameError),
}

/// Resets, seeds and queries the `customers` table, in that order.
pub struct SeedAndQueryRunner {
    db: Database,
    config: SeedConfig,
}

impl SeedAndQueryRunner {
    pub fn new(db: Database, config: SeedConfig) -> Self {
        Self { db, config }
    }

    /// Runs the whole workflow. The first failing step aborts the run.
    pub async fn run(&self) -> Result<(), SeedError> {
        self.reset_schema().await?;

        let customers = self.prepare()?;
        for customer in &customers {
            info!(
                "Inserting customer record for {} {}",
                customer.first_name, customer.last_name
            );
        }
        self.seed(&customers).await?;

        for customer in self.query().await? {
            info!("{customer}");
        }

        Ok(())
    }

    /// Drops and recreates the `customers` table.
    pub async fn reset_schema(&self) -> Result<(), SeedError> {
        info!("Creating tables");
        self.db.reset_customers_table().await?;
        Ok(())
    }

    /// Splits the configured full names into first/last pairs.
    pub fn prepare(&self) -> Result<Vec<NewCustomer>, SeedError> {
        Ok(split_names(&self.config.names)?)
    }

    /// Inserts customers in batches of at most `batch_size` rows.
    pub async fn seed(&self, customers: &[NewCustomer]) -> Result<u64, SeedError> {
        let mut inserted = 0;
        for chunk in customers.chunks(self.config.batch_size.max(1)) {
            inserted += self.db.insert_customers(chunk).await?;
        }
        Ok(inserted)
    }

    /// Fetches every customer whose first name matches the configured one.
    pub async fn query(&self) -> Result<Vec<Customer>, SeedError> {
        info!(
            "Querying for customer records where first_name = '{}':",
            self.config.query_first_name
        );
        let customers = self
            .db
            .find_customers_by_first_name(&self.config.query_first_name)
            .await?;
        Ok(customers)
    }
}
