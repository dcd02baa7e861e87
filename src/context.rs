/// Application context and dependency injection
use crate::{
    account::AccountManager,
    config::MarketConfig,
    db,
    error::{MarketError, MarketResult},
    orders::OrderManager,
};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Application context holding all shared services
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<MarketConfig>,
    pub db: SqlitePool,
    pub account_manager: Arc<AccountManager>,
    pub order_manager: Arc<OrderManager>,
}

impl AppContext {
    /// Create a new application context from configuration
    pub async fn new(config: MarketConfig) -> MarketResult<Self> {
        config.validate()?;

        Self::ensure_directories(&config).await?;

        let pool =
            db::create_pool(&config.storage.market_db, db::DatabaseOptions::default()).await?;

        db::run_migrations(&pool).await?;
        db::test_connection(&pool).await?;

        let config = Arc::new(config);
        let account_manager = Arc::new(AccountManager::new(pool.clone(), Arc::clone(&config)));
        let order_manager = Arc::new(OrderManager::new(pool.clone()));

        Ok(Self {
            config,
            db: pool,
            account_manager,
            order_manager,
        })
    }

    /// Ensure required directories exist
    async fn ensure_directories(config: &MarketConfig) -> MarketResult<()> {
        let dir = &config.storage.data_directory;
        if !dir.exists() {
            tokio::fs::create_dir_all(dir).await.map_err(|e| {
                MarketError::Internal(format!("Failed to create directory {:?}: {}", dir, e))
            })?;
        }

        Ok(())
    }

    /// Get service URL
    pub fn service_url(&self) -> String {
        format!(
            "http://{}:{}",
            self.config.service.hostname, self.config.service.port
        )
    }
}
