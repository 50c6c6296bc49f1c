//! User management service (application-layer orchestration)
//!
//! HTTP handlers are thin wrappers that delegate to this service.

use std::sync::Arc;

use tracing::info;

use super::commands::{CreateUserCommand, UpdateUserCommand};
use super::queries::ListUsersQuery;
use super::validate_password;
use crate::domain::{DomainError, DomainResult, NewUser, RepositoryProvider, User};
use crate::infrastructure::crypto::password::hash_password;
use crate::shared::{normalize_email, PaginatedResult};

pub struct UserService {
    repos: Arc<dyn RepositoryProvider>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, bcrypt_cost: u32) -> Self {
        Self { repos, bcrypt_cost }
    }

    // ── Queries ─────────────────────────────────────────────────

    pub async fn list(&self, query: ListUsersQuery) -> DomainResult<PaginatedResult<User>> {
        self.repos.users().list(query.filter, query.page).await
    }

    pub async fn get(&self, id: &str) -> DomainResult<User> {
        self.repos
            .users()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", id))
    }

    // ── Commands (mutations) ────────────────────────────────────

    pub async fn create(&self, cmd: CreateUserCommand) -> DomainResult<User> {
        let email = normalize_email(&cmd.email);
        validate_password(&cmd.password)?;

        if self.repos.users().find_by_email(&email).await?.is_some() {
            return Err(DomainError::Conflict(format!(
                "A user with email '{}' already exists",
                email
            )));
        }

        let password_hash = self.hash(&cmd.password)?;
        let user = self
            .repos
            .users()
            .create(NewUser {
                nombre: cmd.nombre.trim().to_string(),
                email,
                password_hash,
                rol: cmd.rol,
                activo: cmd.activo,
            })
            .await?;

        info!(user_id = %user.id, rol = %user.rol, "User created");
        Ok(user)
    }

    pub async fn update(&self, id: &str, cmd: UpdateUserCommand) -> DomainResult<User> {
        let mut user = self.get(id).await?;

        if let Some(email) = cmd.email {
            let email = normalize_email(&email);
            if email != user.email {
                if let Some(other) = self.repos.users().find_by_email(&email).await? {
                    if other.id != user.id {
                        return Err(DomainError::Conflict(format!(
                            "A user with email '{}' already exists",
                            email
                        )));
                    }
                }
                user.email = email;
            }
        }
        if let Some(nombre) = cmd.nombre {
            user.nombre = nombre.trim().to_string();
        }
        if let Some(rol) = cmd.rol {
            user.rol = rol;
        }
        let deactivated = matches!(cmd.activo, Some(false)) && user.activo;
        if let Some(activo) = cmd.activo {
            user.activo = activo;
        }

        let user = self.repos.users().update(user).await?;
        if deactivated {
            let revoked = self.repos.refresh_tokens().delete_for_user(&user.id).await?;
            info!(user_id = %user.id, revoked, "User deactivated, sessions revoked");
        }
        Ok(user)
    }

    /// Admins cannot delete their own account.
    pub async fn delete(&self, actor_id: &str, id: &str) -> DomainResult<()> {
        if actor_id == id {
            return Err(DomainError::Conflict(
                "You cannot delete your own account".into(),
            ));
        }
        self.repos.users().delete(id).await?;
        info!(user_id = id, "User deleted");
        Ok(())
    }

    /// Set a new password without knowing the old one; revokes sessions.
    pub async fn reset_password(&self, id: &str, new_password: &str) -> DomainResult<()> {
        validate_password(new_password)?;
        let user = self.get(id).await?;
        let hash = self.hash(new_password)?;
        self.repos.users().update_password(&user.id, &hash).await?;
        self.repos.refresh_tokens().delete_for_user(&user.id).await?;
        info!(user_id = %user.id, "Password reset by administrator");
        Ok(())
    }

    /// Create the configured admin when the users table is empty.
    pub async fn ensure_default_admin(
        &self,
        nombre: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<Option<User>> {
        if self.repos.users().count().await? > 0 {
            return Ok(None);
        }
        let admin = self
            .create(CreateUserCommand {
                nombre: nombre.to_string(),
                email: email.to_string(),
                password: password.to_string(),
                rol: crate::domain::UserRole::Admin,
                activo: true,
            })
            .await?;
        Ok(Some(admin))
    }

    fn hash(&self, password: &str) -> DomainResult<String> {
        hash_password(password, self.bcrypt_cost)
            .map_err(|e| DomainError::Internal(format!("Failed to hash password: {}", e)))
    }
}
