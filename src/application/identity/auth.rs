//! Authentication use-cases: login, refresh-token rotation, logout and
//! password change.

use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::{Duration, Utc};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use super::validate_password;
use crate::domain::{DomainError, DomainResult, NewRefreshToken, RepositoryProvider, User};
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig};
use crate::infrastructure::crypto::password::{hash_password, verify_password};
use crate::infrastructure::crypto::refresh_token::{generate_refresh_token, hash_refresh_token};
use crate::shared::{normalize_email, ShutdownSignal};

/// Token pair returned after a successful login or refresh
#[derive(Debug, Clone)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
    pub user: User,
}

pub struct AuthService {
    repos: Arc<dyn RepositoryProvider>,
    jwt_config: JwtConfig,
    refresh_ttl: Duration,
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        jwt_config: JwtConfig,
        refresh_token_days: i64,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            repos,
            jwt_config,
            refresh_ttl: Duration::days(refresh_token_days),
            bcrypt_cost,
        }
    }

    pub fn jwt_config(&self) -> &JwtConfig {
        &self.jwt_config
    }

    /// Unknown email and wrong password both answer "Invalid credentials".
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthTokens> {
        let email = normalize_email(email);
        let Some(user) = self.repos.users().find_by_email(&email).await? else {
            debug!(%email, "Login for unknown email");
            return Err(DomainError::Unauthorized("Invalid credentials".into()));
        };

        let valid = verify_password(password, &user.password_hash).unwrap_or(false);
        if !valid {
            warn!(user_id = %user.id, "Login with wrong password");
            return Err(DomainError::Unauthorized("Invalid credentials".into()));
        }

        if !user.activo {
            return Err(DomainError::Forbidden("Account is disabled".into()));
        }

        self.repos.users().touch_last_login(&user.id).await?;
        let tokens = self.issue_tokens(user).await?;
        info!(user_id = %tokens.user.id, "User logged in");
        Ok(tokens)
    }

    /// Rotate a refresh token: the presented token is consumed.
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<AuthTokens> {
        let token_hash = hash_refresh_token(refresh_token);
        let Some(stored) = self.repos.refresh_tokens().find_by_hash(&token_hash).await? else {
            return Err(DomainError::Unauthorized("Invalid refresh token".into()));
        };

        // Single use from here on, whatever the outcome.
        self.repos.refresh_tokens().delete(stored.id).await?;

        if stored.is_expired_at(Utc::now()) {
            debug!(user_id = %stored.user_id, "Expired refresh token presented");
            return Err(DomainError::Unauthorized("Refresh token expired".into()));
        }

        let Some(user) = self.repos.users().find_by_id(&stored.user_id).await? else {
            return Err(DomainError::Unauthorized("Invalid refresh token".into()));
        };
        if !user.activo {
            return Err(DomainError::Forbidden("Account is disabled".into()));
        }

        self.issue_tokens(user).await
    }

    /// Idempotent: unknown tokens are ignored.
    pub async fn logout(&self, refresh_token: &str) -> DomainResult<()> {
        let token_hash = hash_refresh_token(refresh_token);
        if let Some(stored) = self.repos.refresh_tokens().find_by_hash(&token_hash).await? {
            self.repos.refresh_tokens().delete(stored.id).await?;
            info!(user_id = %stored.user_id, "User logged out");
        }
        Ok(())
    }

    pub async fn me(&self, user_id: &str) -> DomainResult<User> {
        self.repos
            .users()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::Unauthorized("User no longer exists".into()))
    }

    /// Verifies the current password, stores the new one and revokes every
    /// refresh token of the user.
    pub async fn change_password(
        &self,
        user_id: &str,
        current_password: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        validate_password(new_password)?;

        let user = self.me(user_id).await?;
        let valid = verify_password(current_password, &user.password_hash).unwrap_or(false);
        if !valid {
            return Err(DomainError::Unauthorized("Invalid current password".into()));
        }

        let new_hash = hash_password(new_password, self.bcrypt_cost)
            .map_err(|e| DomainError::Internal(format!("Failed to hash password: {}", e)))?;
        self.repos.users().update_password(&user.id, &new_hash).await?;
        let revoked = self.repos.refresh_tokens().delete_for_user(&user.id).await?;

        info!(user_id = %user.id, revoked, "Password changed");
        Ok(())
    }

    /// Re-reads the caller on every request so deactivation and role changes
    /// apply before the access token expires.
    pub async fn current_user(&self, user_id: &str) -> DomainResult<User> {
        let Some(user) = self.repos.users().find_by_id(user_id).await? else {
            return Err(DomainError::Unauthorized("Unknown user".into()));
        };
        if !user.activo {
            return Err(DomainError::Forbidden("Account is disabled".into()));
        }
        Ok(user)
    }

    pub async fn purge_expired_refresh_tokens(&self) -> DomainResult<u64> {
        let removed = self.repos.refresh_tokens().delete_expired(Utc::now()).await?;
        if removed > 0 {
            info!(removed, "Expired refresh tokens purged");
        }
        Ok(removed)
    }

    async fn issue_tokens(&self, user: User) -> DomainResult<AuthTokens> {
        let access_token = create_token(&user.id, &user.email, user.rol.as_str(), &self.jwt_config)
            .map_err(|e| DomainError::Internal(format!("Failed to create token: {}", e)))?;

        let refresh_token = generate_refresh_token();
        self.repos
            .refresh_tokens()
            .create(NewRefreshToken {
                token_hash: hash_refresh_token(&refresh_token),
                user_id: user.id.clone(),
                expires_at: Utc::now() + self.refresh_ttl,
            })
            .await?;

        Ok(AuthTokens {
            access_token,
            refresh_token,
            token_type: "Bearer".into(),
            expires_in: self.jwt_config.expires_in(),
            user,
        })
    }
}

/// Periodically delete expired refresh tokens until shutdown.
pub fn spawn_refresh_token_purge(
    auth: Arc<AuthService>,
    interval_secs: u64,
    shutdown: ShutdownSignal,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(StdDuration::from_secs(interval_secs.max(1)));
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if let Err(e) = auth.purge_expired_refresh_tokens().await {
                        error!(error = %e, "Refresh token purge failed");
                    }
                }
                _ = shutdown.wait() => break,
            }
        }
        debug!("Refresh token purge task stopped");
    })
}
