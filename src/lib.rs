/// G4Market - game-account storefront
///
/// Storefront domain logic (catalog, persistence backends, the session/UI
/// controller, and the order-history renderer) plus the axum server that
/// backs the remote store variant.

pub mod account;
pub mod api;
pub mod auth;
pub mod catalog;
pub mod config;
pub mod context;
pub mod controller;
pub mod db;
pub mod error;
pub mod orders;
pub mod render;
pub mod server;
pub mod store;
