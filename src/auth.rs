/// Authentication extractors
use crate::{
    account::ValidatedSession, api::middleware::extract_bearer_token, context::AppContext,
    error::MarketError,
};
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

/// Authenticated context - extracts and validates the session from the
/// request's bearer token
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub username: String,
    pub session: ValidatedSession,
}

#[async_trait]
impl FromRequestParts<AppContext> for AuthContext {
    type Rejection = MarketError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppContext,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers).ok_or_else(|| {
            MarketError::AuthenticationRequired("Missing authorization header".to_string())
        })?;

        let session = state.account_manager.validate_access_token(&token).await?;

        let username = session.username.clone();

        Ok(AuthContext { username, session })
    }
}

/// Optional authenticated context - does not fail if no auth provided
#[derive(Debug, Clone)]
pub struct OptionalAuthContext {
    pub auth: Option<AuthContext>,
}

#[async_trait]
impl FromRequestParts<AppContext> for OptionalAuthContext {
    type Rejection = MarketError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppContext,
    ) -> Result<Self, Self::Rejection> {
        let auth = if let Some(token) = extract_bearer_token(&parts.headers) {
            match state.account_manager.validate_access_token(&token).await {
                Ok(session) => {
                    let username = session.username.clone();
                    Some(AuthContext { username, session })
                }
                Err(_) => None,
            }
        } else {
            None
        };

        Ok(OptionalAuthContext { auth })
    }
}
