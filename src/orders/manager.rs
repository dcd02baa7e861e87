/// Order manager backed by runtime sqlx queries
use crate::{
    catalog,
    db::models::OrderRecord,
    error::{MarketError, MarketResult},
    orders::{Order, TIMESTAMP_FORMAT},
};
use chrono::Utc;
use sqlx::SqlitePool;

/// Order service over the market database
pub struct OrderManager {
    db: SqlitePool,
}

impl OrderManager {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Create an order for a user: generate the credential batch for the
    /// product, persist it, and return the finished order.
    pub async fn create_order(&self, username: &str, product_name: &str) -> MarketResult<Order> {
        let accounts = catalog::generate_credentials(product_name);
        let accounts_data = serde_json::to_string(&accounts)?;

        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO orders (username, product_name, accounts_data, created_at)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(username)
        .bind(product_name)
        .bind(&accounts_data)
        .bind(now)
        .execute(&self.db)
        .await
        .map_err(MarketError::Database)?;

        let id = result.last_insert_rowid();

        tracing::info!(
            "create_order: Order {} created for {} ({} credentials)",
            id,
            username,
            accounts.len()
        );

        Ok(Order {
            id,
            username: username.to_string(),
            product_name: product_name.to_string(),
            accounts,
            created_at: now.format(TIMESTAMP_FORMAT).to_string(),
        })
    }

    /// List a user's orders in creation order
    pub async fn list_orders(&self, username: &str) -> MarketResult<Vec<Order>> {
        let rows = sqlx::query_as::<_, OrderRecord>(
            "SELECT id, username, product_name, accounts_data, created_at
             FROM orders WHERE username = ?1 ORDER BY id ASC",
        )
        .bind(username)
        .fetch_all(&self.db)
        .await
        .map_err(MarketError::Database)?;

        let mut orders = Vec::with_capacity(rows.len());
        for row in rows {
            orders.push(Order {
                id: row.id,
                username: row.username,
                product_name: row.product_name,
                accounts: serde_json::from_str(&row.accounts_data)?,
                created_at: row.created_at.format(TIMESTAMP_FORMAT).to_string(),
            });
        }

        Ok(orders)
    }
}
