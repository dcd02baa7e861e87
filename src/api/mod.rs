/// API routes and handlers
pub mod middleware;
pub mod storefront;

use crate::context::AppContext;
use axum::Router;

/// Build API routes
pub fn routes() -> Router<AppContext> {
    Router::new().merge(storefront::routes())
}
