//! PostgreSQL connection pool management

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{debug, instrument};
use userinfo_common::DatabaseConfig;

/// Build pool options from configuration
fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout())
}

/// Create a new PostgreSQL connection pool
///
/// The pool connects lazily, so an unreachable server surfaces on the first
/// acquire rather than here.
#[instrument(skip(config), fields(max_connections = config.max_connections))]
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = pool_options(config).connect_lazy(&config.url)?;
    debug!("Database pool created");
    Ok(pool)
}
