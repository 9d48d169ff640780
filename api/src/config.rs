//! Environment-driven configuration for the API process

use std::env;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    /// Load server configuration from environment. The port falls back
    /// to 3000 when `PORT` is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidConfig(format!("Invalid port: {}", e)))?;

        debug!("Server configuration loaded: port={}", port);

        Ok(ServerConfig { port })
    }
}

/// Database configuration, including the startup retry budget
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub connect_max_attempts: u32,
    pub backoff_base_secs: u64,
    pub backoff_max_secs: u64,
}

impl DatabaseConfig {
    /// Load database configuration from environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let connection_string = env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnv("DATABASE_URL".to_string()))?;

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .map_err(|e| ConfigError::InvalidConfig(format!("Invalid max_connections: {}", e)))?;

        let connect_max_attempts = env::var("DB_CONNECT_MAX_ATTEMPTS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .map_err(|e| {
                ConfigError::InvalidConfig(format!("Invalid connect max attempts: {}", e))
            })?;

        if connect_max_attempts < 1 {
            return Err(ConfigError::InvalidConfig(
                "Connect max attempts must be at least 1".to_string(),
            ));
        }

        let backoff_base_secs = env::var("DB_CONNECT_BACKOFF_BASE_SECS")
            .unwrap_or_else(|_| "1".to_string())
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidConfig(format!("Invalid backoff base interval: {}", e))
            })?;

        let backoff_max_secs = env::var("DB_CONNECT_BACKOFF_MAX_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidConfig(format!("Invalid backoff max interval: {}", e))
            })?;

        debug!(
            "Database configuration loaded: max_connections={}, connect_max_attempts={}",
            max_connections, connect_max_attempts
        );

        Ok(DatabaseConfig {
            connection_string,
            max_connections,
            connect_max_attempts,
            backoff_base_secs,
            backoff_max_secs,
        })
    }
}

/// Full service configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load full service configuration
    pub fn from_env() -> Result<Self, ConfigError> {
        let server = ServerConfig::from_env()?;
        let database = DatabaseConfig::from_env()?;

        info!(
            "Service configuration loaded: port={}, db_max_connections={}",
            server.port, database.max_connections
        );

        Ok(AppConfig { server, database })
    }
}
