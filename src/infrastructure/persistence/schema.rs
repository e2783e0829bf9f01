//! Database and table provisioning, run once at startup.
//!
//! Mirrors the two-phase startup of the storage layout: first make sure the
//! target database exists (SQLx connects to the server's maintenance
//! database for this), then connect scoped to it and issue idempotent DDL
//! for the two tables. Any failure here is fatal to the process.

use anyhow::{Context, Result};
use sqlx::migrate::MigrateDatabase;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres};
use std::time::Duration;

use crate::config::Config;

const CREATE_CUSTOMERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS customers (
    meter_no VARCHAR(20) PRIMARY KEY,
    name     VARCHAR(100),
    address  VARCHAR(200),
    email    VARCHAR(100)
)
"#;

const CREATE_USAGE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS "usage" (
    meter_no       VARCHAR(20),
    month          VARCHAR(20),
    units_consumed INT,
    PRIMARY KEY (meter_no, month),
    FOREIGN KEY (meter_no) REFERENCES customers(meter_no)
)
"#;

/// Creates the target database when it does not exist yet.
pub async fn ensure_database(database_url: &str) -> Result<(), sqlx::Error> {
    if !Postgres::database_exists(database_url).await? {
        tracing::info!("Target database missing, creating it");
        Postgres::create_database(database_url).await?;
    }

    Ok(())
}

/// Connects the pool used for the rest of the process lifetime.
///
/// The pool is capped by `DB_MAX_CONNECTIONS` (default 1): the application
/// is strictly serial, so a single connection is reused for every
/// statement.
pub async fn connect(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await
}

/// Issues the idempotent DDL for the `customers` and `usage` tables.
pub async fn create_tables(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_CUSTOMERS_TABLE).execute(pool).await?;
    sqlx::query(CREATE_USAGE_TABLE).execute(pool).await?;

    Ok(())
}

/// Full startup provisioning: ensure database, connect, create tables.
pub async fn provision(config: &Config) -> Result<PgPool> {
    ensure_database(&config.database_url)
        .await
        .context("Failed to create target database")?;

    let pool = connect(config)
        .await
        .context("Failed to connect to database")?;

    create_tables(&pool)
        .await
        .context("Failed to create tables")?;

    tracing::info!("Database connection successful");

    Ok(pool)
}
