//! Identity module: user management and authentication
//!
//! `AuthService` covers login, token refresh/rotation, logout and
//! password changes. `UserService` is the admin-only user management.

pub mod auth;
pub mod commands;
pub mod queries;
pub mod service;

pub use auth::{spawn_refresh_token_purge, AuthService, AuthTokens};
pub use commands::{CreateUserCommand, UpdateUserCommand};
pub use queries::ListUsersQuery;
pub use service::UserService;

pub(crate) const MIN_PASSWORD_LEN: usize = 8;

pub(crate) fn validate_password(password: &str) -> crate::domain::DomainResult<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(crate::domain::DomainError::Validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}
