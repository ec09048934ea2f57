//! Seed-and-query workflow for the `customers` table.
//!
//! The [`SeedAndQueryRunner`](db::SeedAndQueryRunner) resets the table, inserts one
//! row per configured full name, then logs every customer matching the configured
//! first name.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let config = SeedConfig::from_env();
//! let pool = PgPoolOptions::new().connect(&config.database_url).await?;
//! SeedAndQueryRunner::new(Database::new(pool), config)
//!     .run()
//!     .await?;
//! ```

pub mod config;
pub mod db;
pub mod names;

pub use customers::{Customer, Database, NewCustomer};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::SeedConfig;
    pub use crate::db::{SeedAndQueryRunner, SeedError};
    pub use crate::names::{NameError, split_full_name, split_names};
    pub use crate::{Customer, Database, NewCustomer};
}
