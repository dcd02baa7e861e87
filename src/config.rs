/// Configuration management for G4Market
use crate::error::{MarketError, MarketResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Main server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConfig {
    pub service: ServiceConfig,
    pub storage: StorageConfig,
    pub sessions: SessionConfig,
    pub logging: LoggingConfig,
}

/// Service-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub hostname: String,
    pub port: u16,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_directory: PathBuf,
    pub market_db: PathBuf,
}

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Access token lifetime in hours
    pub ttl_hours: i64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl MarketConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> MarketResult<Self> {
        dotenv::dotenv().ok();

        let hostname = env::var("G4MARKET_HOSTNAME").unwrap_or_else(|_| "localhost".to_string());
        let port = env::var("G4MARKET_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .map_err(|_| MarketError::Validation("Invalid port number".to_string()))?;

        let data_directory: PathBuf = env::var("G4MARKET_DATA_DIRECTORY")
            .unwrap_or_else(|_| "./data".to_string())
            .into();
        let market_db = env::var("G4MARKET_DB_LOCATION")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_directory.join("market.sqlite"));

        let ttl_hours = env::var("G4MARKET_SESSION_TTL_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(MarketConfig {
            service: ServiceConfig { hostname, port },
            storage: StorageConfig {
                data_directory,
                market_db,
            },
            sessions: SessionConfig { ttl_hours },
            logging: LoggingConfig { level: log_level },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> MarketResult<()> {
        if self.service.hostname.is_empty() {
            return Err(MarketError::Validation(
                "Hostname cannot be empty".to_string(),
            ));
        }

        if self.sessions.ttl_hours <= 0 {
            return Err(MarketError::Validation(
                "Session TTL must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
