use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use crate::config::Config;
use crate::utils::error::StartupError;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Pool settings derived from the configuration.
///
/// sqlx reaps idle connections itself and has no separate idle ceiling, so
/// `idle_conns_max` caps the total pool size, busy connections included.
/// Callers past that limit wait up to the acquire timeout for a free one.
pub fn pool_options(config: &Config) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.idle_conns_max)
        .max_lifetime(config.conn_max_lifetime)
        .acquire_timeout(ACQUIRE_TIMEOUT)
}

pub async fn create_pool(config: &Config) -> Result<PgPool, StartupError> {
    if config.db_uri.is_empty() {
        return Err(StartupError::MissingDatabaseUri);
    }

    let pool = pool_options(config).connect(&config.db_uri).await?;
    tracing::info!("Successfully connected to database");

    Ok(pool)
}
