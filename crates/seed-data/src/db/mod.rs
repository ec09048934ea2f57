//! Database side of the seed workflow.
//!
//! The [`SeedAndQueryRunner`] drives the reset, insert and query steps against a
//! [`customers::Database`] handle it is given.

mod runner;

pub use runner::{SeedAndQueryRunner, SeedError};
