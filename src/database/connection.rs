use crate::config::DatabaseConfig;
use crate::error::{AppError, AppResult};
use sqlx::ConnectOptions as _;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sea_orm::{ConnectionTrait, DatabaseConnection, SqlxPostgresConnector, Statement};
use std::sync::Arc;
use std::time::Duration;

/// Shared handle to the connection pool.
pub type DbPool = Arc<DatabaseConnection>;

/// Builds the bounded connection pool. No connection is opened here, so an
/// unreachable database surfaces on first use rather than at startup.
///
/// Must be called from within the async runtime.
pub async fn create_pool(config: &DatabaseConfig) -> AppResult<DbPool> {
    let connect_options = config
        .url
        .parse::<PgConnectOptions>()
        .map_err(|e| AppError::ConfigError(format!("Invalid database url: {e}")))?
        .disable_statement_logging();

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .connect_lazy_with(connect_options);

    Ok(Arc::new(SqlxPostgresConnector::from_sqlx_postgres_pool(pool)))
}

/// Trivial connectivity probe.
pub async fn ping(pool: &DatabaseConnection) -> AppResult<()> {
    pool.query_one(Statement::from_string(
        pool.get_database_backend(),
        "SELECT 1",
    ))
    .await?;
    Ok(())
}
