/// Local blob store
///
/// Persists everything as JSON blobs under three fixed keys, one file per
/// key: a map of username to `{password}` records, a flat list of all
/// orders across all users, and the session username. Every read re-parses
/// the whole blob; acceptable only because expected data volume is tiny.
/// Passwords are kept in plaintext here - that is the blob contract, and a
/// known insecurity of this variant.
use crate::{
    catalog,
    error::{MarketError, MarketResult},
    orders::{Order, TIMESTAMP_FORMAT},
    store::Store,
};
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

pub const USERS_KEY: &str = "g4_users";
pub const ORDERS_KEY: &str = "g4_orders";
pub const SESSION_KEY: &str = "g4_session";

/// Stored user record: `{"password": "..."}` keyed by username
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredUser {
    password: String,
}

pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Open a store rooted at `root`, creating the directory if needed
    pub async fn open(root: impl Into<PathBuf>) -> MarketResult<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    async fn read_key(&self, key: &str) -> MarketResult<Option<String>> {
        match tokio::fs::read_to_string(self.key_path(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_key(&self, key: &str, value: &str) -> MarketResult<()> {
        tokio::fs::write(self.key_path(key), value).await?;
        Ok(())
    }

    async fn remove_key(&self, key: &str) -> MarketResult<()> {
        match tokio::fs::remove_file(self.key_path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn users(&self) -> MarketResult<HashMap<String, StoredUser>> {
        Ok(match self.read_key(USERS_KEY).await? {
            Some(blob) => serde_json::from_str(&blob)?,
            None => HashMap::new(),
        })
    }

    async fn all_orders(&self) -> MarketResult<Vec<Order>> {
        Ok(match self.read_key(ORDERS_KEY).await? {
            Some(blob) => serde_json::from_str(&blob)?,
            None => Vec::new(),
        })
    }
}

#[async_trait]
impl Store for LocalStore {
    async fn register_user(&self, username: &str, password: &str) -> MarketResult<()> {
        let mut users = self.users().await?;
        if users.contains_key(username) {
            return Err(MarketError::DuplicateUser);
        }

        users.insert(
            username.to_string(),
            StoredUser {
                password: password.to_string(),
            },
        );
        self.write_key(USERS_KEY, &serde_json::to_string(&users)?)
            .await
    }

    async fn login(&mut self, username: &str, password: &str) -> MarketResult<String> {
        let users = self.users().await?;
        let valid = users
            .get(username)
            .map(|user| user.password == password)
            .unwrap_or(false);

        if !valid {
            return Err(MarketError::InvalidCredentials);
        }

        self.write_key(SESSION_KEY, username).await?;
        Ok(username.to_string())
    }

    async fn current_user(&self) -> MarketResult<Option<String>> {
        self.read_key(SESSION_KEY).await
    }

    async fn logout(&mut self) -> MarketResult<()> {
        self.remove_key(SESSION_KEY).await
    }

    async fn list_orders(&self, username: &str) -> MarketResult<Vec<Order>> {
        // Insertion order of the flat blob is creation order
        Ok(self
            .all_orders()
            .await?
            .into_iter()
            .filter(|order| order.username == username)
            .collect())
    }

    async fn create_order(&self, username: &str, product_name: &str) -> MarketResult<Order> {
        let mut orders = self.all_orders().await?;

        let now = Utc::now();
        let order = Order {
            id: now.timestamp_millis(),
            username: username.to_string(),
            product_name: product_name.to_string(),
            accounts: catalog::generate_credentials(product_name),
            created_at: now.format(TIMESTAMP_FORMAT).to_string(),
        };

        orders.push(order.clone());
        self.write_key(ORDERS_KEY, &serde_json::to_string(&orders)?)
            .await?;

        Ok(order)
    }
}
