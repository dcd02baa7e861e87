/// Account manager implementation using runtime queries
use crate::{
    account::ValidatedSession,
    config::MarketConfig,
    db::models::{SessionRecord, UserRecord},
    error::{MarketError, MarketResult},
};
use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use chrono::{DateTime, Duration, Utc};
use sqlx::{Row, SqlitePool};
use std::sync::Arc;
use uuid::Uuid;

/// Account service over the market database
pub struct AccountManager {
    db: SqlitePool,
    config: Arc<MarketConfig>,
}

impl AccountManager {
    pub fn new(db: SqlitePool, config: Arc<MarketConfig>) -> Self {
        Self { db, config }
    }

    /// Register a new user
    pub async fn register(&self, username: &str, password: &str) -> MarketResult<UserRecord> {
        if username.is_empty() || password.is_empty() {
            return Err(MarketError::Validation(
                "Missing username or password".to_string(),
            ));
        }

        if self.username_exists(username).await? {
            return Err(MarketError::DuplicateUser);
        }

        let password_hash = hash_password(password)?;

        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO users (username, password_hash, created_at) VALUES (?1, ?2, ?3)",
        )
        .bind(username)
        .bind(&password_hash)
        .bind(now)
        .execute(&self.db)
        .await
        .map_err(MarketError::Database)?;

        tracing::info!("register: Account created for {}", username);

        Ok(UserRecord {
            id: result.last_insert_rowid(),
            username: username.to_string(),
            password_hash,
            created_at: now,
        })
    }

    /// Verify credentials and open a session
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> MarketResult<(UserRecord, SessionRecord)> {
        let user = match self.get_user(username).await? {
            Some(user) => user,
            None => return Err(MarketError::InvalidCredentials),
        };

        if !verify_password(password, &user.password_hash)? {
            return Err(MarketError::InvalidCredentials);
        }

        let session = self.create_session(&user.username).await?;

        Ok((user, session))
    }

    /// Create a session for a username
    pub async fn create_session(&self, username: &str) -> MarketResult<SessionRecord> {
        let session_id = Uuid::new_v4().to_string();
        let access_token = Uuid::new_v4().to_string();

        let now = Utc::now();
        let expires_at = now + Duration::hours(self.config.sessions.ttl_hours);

        sqlx::query(
            "INSERT INTO sessions (id, username, access_token, created_at, expires_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&session_id)
        .bind(username)
        .bind(&access_token)
        .bind(now)
        .bind(expires_at)
        .execute(&self.db)
        .await
        .map_err(MarketError::Database)?;

        Ok(SessionRecord {
            id: session_id,
            username: username.to_string(),
            access_token,
            created_at: now,
            expires_at,
        })
    }

    /// Validate an access token and return session info
    pub async fn validate_access_token(&self, token: &str) -> MarketResult<ValidatedSession> {
        let row = sqlx::query(
            "SELECT id, username, expires_at FROM sessions WHERE access_token = ?1",
        )
        .bind(token)
        .fetch_optional(&self.db)
        .await
        .map_err(MarketError::Database)?
        .ok_or_else(|| {
            MarketError::AuthenticationRequired("Invalid or expired session".to_string())
        })?;

        let session_id: String = row.get("id");
        let username: String = row.get("username");
        let expires_at: DateTime<Utc> = row.get("expires_at");

        if Utc::now() > expires_at {
            return Err(MarketError::AuthenticationRequired(
                "Session expired".to_string(),
            ));
        }

        Ok(ValidatedSession {
            username,
            session_id,
        })
    }

    /// Delete a session (logout)
    pub async fn delete_session(&self, session_id: &str) -> MarketResult<()> {
        sqlx::query("DELETE FROM sessions WHERE id = ?1")
            .bind(session_id)
            .execute(&self.db)
            .await
            .map_err(MarketError::Database)?;

        Ok(())
    }

    /// Get a user by username
    pub async fn get_user(&self, username: &str) -> MarketResult<Option<UserRecord>> {
        let row = sqlx::query(
            "SELECT id, username, password_hash, created_at FROM users WHERE username = ?1",
        )
        .bind(username)
        .fetch_optional(&self.db)
        .await
        .map_err(MarketError::Database)?;

        Ok(row.map(|row| UserRecord {
            id: row.get("id"),
            username: row.get("username"),
            password_hash: row.get("password_hash"),
            created_at: row.get("created_at"),
        }))
    }

    async fn username_exists(&self, username: &str) -> MarketResult<bool> {
        Ok(self.get_user(username).await?.is_some())
    }
}

fn hash_password(password: &str) -> MarketResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| MarketError::Internal(format!("Password hashing failed: {}", e)))
}

fn verify_password(password: &str, hash: &str) -> MarketResult<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| MarketError::Internal(format!("Malformed password hash: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_roundtrip() {
        let hash = hash_password("pw1").unwrap();
        assert!(verify_password("pw1", &hash).unwrap());
        assert!(!verify_password("pw2", &hash).unwrap());
    }
}
