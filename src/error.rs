/// Unified error types for G4Market
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the storefront
#[derive(Error, Debug)]
pub enum MarketError {
    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Username already taken at registration
    #[error("Username already exists")]
    DuplicateUser,

    /// Login with a bad username/password pair
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Missing or stale session on an operation that requires one
    #[error("Authentication required: {0}")]
    AuthenticationRequired(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Transport failures from the remote store (catch-all)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Error reported by the remote API, surfaced verbatim
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Blob (de)serialization errors in the local store
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body: `{"error": "..."}` on every non-2xx
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for MarketError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            MarketError::DuplicateUser | MarketError::Validation(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            MarketError::InvalidCredentials | MarketError::AuthenticationRequired(_) => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            MarketError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            MarketError::Database(_)
            | MarketError::Io(_)
            | MarketError::Serialization(_)
            | MarketError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                // Don't leak details
                "Internal server error".to_string(),
            ),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(ErrorBody { error: message });

        (status, body).into_response()
    }
}

/// Result type alias for storefront operations
pub type MarketResult<T> = Result<T, MarketError>;
