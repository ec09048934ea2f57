//! Customer records backed by Postgres.
//!
//! [`database::Database`] owns every SQL statement the seed workflow issues;
//! [`models`] holds the row types it reads and writes.

pub mod database;
pub mod errors;
pub mod models;

pub use database::Database;
pub use errors::AppError;
pub use models::{Customer, NewCustomer};
