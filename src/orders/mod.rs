/// Order management
///
/// An order records one purchase: the product, the generated credential
/// batch, and a display timestamp. Orders are immutable once created and
/// owned by exactly one user.

mod manager;

pub use manager::OrderManager;

use crate::catalog::AccountCredential;
use serde::{Deserialize, Serialize};

/// Display format for order timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Order as shipped over the wire and stored in the local blob store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub username: String,
    pub product_name: String,
    pub accounts: Vec<AccountCredential>,
    pub created_at: String,
}

/// Orders listing response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdersResponse {
    pub orders: Vec<Order>,
}

/// Purchase request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuyRequest {
    pub product_name: String,
}
