/// Database row models
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Registered user row. Created on registration, never mutated or deleted.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Session row backing a bearer token
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: String,
    pub username: String,
    pub access_token: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Order row. `accounts_data` holds the generated credentials as a JSON
/// string, mirroring how orders are shipped over the wire.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: i64,
    pub username: String,
    pub product_name: String,
    pub accounts_data: String,
    pub created_at: DateTime<Utc>,
}
