//! Resets the customers table, seeds it, and logs the matching customers.
//!
//! Run with:
//! ```
//! DATABASE_URL=postgres://... cargo run -p seed-data --bin seed
//! ```

use customers::Database;
use seed_data::config::SeedConfig;
use seed_data::db::SeedAndQueryRunner;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    let runner = SeedAndQueryRunner::new(Database::new(pool.clone()), config);
    let result = runner.run().await;

    pool.close().await;
    result?;

    Ok(())
}
