//! Database lifecycle
//!
//! Wraps the process-wide connection pool in an explicit object:
//! connect (with backoff-retried startup), migrate, health probe, and
//! close on shutdown. A connection that cannot be established within
//! the attempt budget fails startup instead of being logged and
//! ignored.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::backoff::{execute_with_backoff, ExponentialBackoff};
use crate::config::DatabaseConfig;

pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL, retrying with exponential backoff up to
    /// the configured attempt budget.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let backoff = ExponentialBackoff::new(config.backoff_base_secs, config.backoff_max_secs);

        let pool = execute_with_backoff(backoff, config.connect_max_attempts, || {
            PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.connection_string)
        })
        .await?;

        tracing::info!(
            max_connections = config.max_connections,
            "database pool established"
        );

        Ok(Self { pool })
    }

    /// Apply pending migrations from the workspace `migrations/` dir
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("../migrations").run(&self.pool).await
    }

    /// Cheap liveness probe run once after connecting
    pub async fn ping(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .is_ok()
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Drain and close the pool; called on graceful shutdown
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("database pool closed");
    }
}
