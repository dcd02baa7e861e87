/// Account management system
///
/// Handles user registration, login verification, and bearer-token
/// sessions for the storefront API.

mod manager;

pub use manager::AccountManager;

use serde::{Deserialize, Serialize};

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response. `access_token` is the bearer token the client presents
/// on subsequent requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub username: String,
    pub access_token: String,
}

/// Session probe response (for /api/user_info)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub is_authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Validated session from a bearer token
#[derive(Debug, Clone)]
pub struct ValidatedSession {
    pub username: String,
    pub session_id: String,
}
