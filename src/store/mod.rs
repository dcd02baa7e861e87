/// Persistence backends for the storefront client
///
/// The controller is generic over this trait, so the local-blob and
/// remote-API variants share one state machine. `login` both verifies the
/// credentials and establishes the session: the remote server opens the
/// session as part of verification, so the two steps cannot be split at
/// this seam.

pub mod local;
pub mod remote;

pub use local::LocalStore;
pub use remote::RemoteStore;

use crate::error::MarketResult;
use crate::orders::Order;
use async_trait::async_trait;

/// What the controller should do after a successful purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseFollowUp {
    /// Stay on the current section
    Stay,
    /// Navigate to the order history
    GoToHistory,
}

#[async_trait]
pub trait Store: Send {
    /// Register a new user. Fails with `DuplicateUser` if taken.
    async fn register_user(&self, username: &str, password: &str) -> MarketResult<()>;

    /// Verify credentials and establish the session. Returns the
    /// authenticated username; fails with `InvalidCredentials`.
    async fn login(&mut self, username: &str, password: &str) -> MarketResult<String>;

    /// Probe the current session
    async fn current_user(&self) -> MarketResult<Option<String>>;

    /// Clear the session
    async fn logout(&mut self) -> MarketResult<()>;

    /// Orders owned by `username`, in creation order
    async fn list_orders(&self, username: &str) -> MarketResult<Vec<Order>>;

    /// Create an order: generate the credential batch for the product and
    /// append it to the store
    async fn create_order(&self, username: &str, product_name: &str) -> MarketResult<Order>;

    /// Post-purchase navigation hint
    fn after_purchase(&self) -> PurchaseFollowUp {
        PurchaseFollowUp::Stay
    }
}
