// src/config/db.rs
// DOCUMENTATION: PostgreSQL pool setup and schema migrations
// PURPOSE: Build the single PgPool shared by every repository

use crate::config::Config;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

const IDLE_TIMEOUT_SECS: u64 = 300;
const MAX_LIFETIME_SECS: u64 = 1800;

/// Connect, probe and (optionally) migrate
/// DOCUMENTATION: Called once from main.rs; startup aborts on any error here
pub async fn init_db_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    log::info!(
        "Connecting to database at {} (max {} connections)",
        redact_url(&config.database_url),
        config.db_max_connections
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connection_timeout))
        .idle_timeout(Duration::from_secs(IDLE_TIMEOUT_SECS))
        .max_lifetime(Duration::from_secs(MAX_LIFETIME_SECS))
        .connect(&config.database_url)
        .await?;

    sqlx::query("SELECT 1").execute(&pool).await?;

    if config.run_migrations {
        run_migrations(&pool).await?;
    } else {
        log::warn!("RUN_MIGRATIONS disabled; assuming schema is current");
    }

    log::info!("Database pool ready");
    Ok(pool)
}

/// Apply migrations embedded from ./migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::migrate!("./migrations").run(pool).await?;
    log::info!("Database migrations applied");
    Ok(())
}

/// Hide the password part of a connection URL for logging
fn redact_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let Some((credentials, host)) = rest.rsplit_once('@') else {
        return url.to_string();
    };
    match credentials.split_once(':') {
        Some((user, _)) => format!("{}://{}:***@{}", scheme, user, host),
        None => url.to_string(),
    }
}
