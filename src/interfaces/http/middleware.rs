//! Authentication middleware and role guards

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, Method, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use super::common::{ApiError, ApiResponse};
use crate::application::AuthService;
use crate::domain::{DomainError, User, UserRole};
use crate::infrastructure::crypto::jwt::{verify_token, JwtConfig};

#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
    ExpiredToken,
    AccountDisabled,
    InsufficientPermissions,
}

/// State needed to verify access tokens
#[derive(Clone)]
pub struct AuthState {
    pub jwt_config: JwtConfig,
    pub auth: Arc<AuthService>,
}

/// Caller identity: token subject resolved against the stored user
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub email: String,
    pub rol: UserRole,
}

impl AuthenticatedUser {
    /// The stored role wins over the one embedded in the token.
    pub fn from_user(user: &User) -> Self {
        Self {
            user_id: user.id.clone(),
            email: user.email.clone(),
            rol: user.rol,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.rol.is_admin()
    }
}

fn extract_token(auth_header: &str) -> Option<&str> {
    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Requires a valid `Authorization: Bearer <jwt>` header.
pub async fn auth_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let Some(auth_header) = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    else {
        return auth_error_response(AuthError::MissingToken);
    };

    let Some(token) = extract_token(auth_header) else {
        return auth_error_response(AuthError::InvalidToken);
    };

    let claims = match verify_token(token, &auth_state.jwt_config) {
        Ok(claims) => claims,
        Err(e) => {
            debug!(error = %e, "Rejected access token");
            return match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    auth_error_response(AuthError::ExpiredToken)
                }
                _ => auth_error_response(AuthError::InvalidToken),
            };
        }
    };
    if claims.is_expired() {
        return auth_error_response(AuthError::ExpiredToken);
    }

    let user = match auth_state.auth.current_user(&claims.sub).await {
        Ok(user) => user,
        Err(DomainError::Unauthorized(_)) => return auth_error_response(AuthError::InvalidToken),
        Err(DomainError::Forbidden(_)) => return auth_error_response(AuthError::AccountDisabled),
        Err(e) => return ApiError::from(e).into_response(),
    };
    if claims.rol != user.rol.as_str() {
        debug!(user_id = %user.id, "Role changed since the token was issued");
    }
    request
        .extensions_mut()
        .insert(AuthenticatedUser::from_user(&user));
    next.run(request).await
}

/// `readonly` callers may only read. Must run after `auth_middleware`.
pub async fn require_write(request: Request<Body>, next: Next) -> Response {
    let read_only = matches!(
        *request.method(),
        Method::GET | Method::HEAD | Method::OPTIONS
    );
    match request.extensions().get::<AuthenticatedUser>() {
        Some(user) if read_only || user.rol.can_write() => next.run(request).await,
        Some(_) => auth_error_response(AuthError::InsufficientPermissions),
        None => auth_error_response(AuthError::MissingToken),
    }
}

/// Admin-only routes. Must run after `auth_middleware`.
pub async fn admin_middleware(request: Request<Body>, next: Next) -> Response {
    match request.extensions().get::<AuthenticatedUser>() {
        Some(user) if user.is_admin() => next.run(request).await,
        Some(_) => auth_error_response(AuthError::InsufficientPermissions),
        None => auth_error_response(AuthError::MissingToken),
    }
}

fn auth_error_response(error: AuthError) -> Response {
    let (status, message) = match error {
        AuthError::MissingToken => (StatusCode::UNAUTHORIZED, "Missing authentication token"),
        AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid authentication token"),
        AuthError::ExpiredToken => (StatusCode::UNAUTHORIZED, "Token has expired"),
        AuthError::AccountDisabled => (StatusCode::FORBIDDEN, "Account is disabled"),
        AuthError::InsufficientPermissions => (StatusCode::FORBIDDEN, "Insufficient permissions"),
    };
    (status, Json(ApiResponse::<()>::error(message))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_prefix_is_required() {
        assert_eq!(extract_token("Bearer abc"), Some("abc"));
        assert_eq!(extract_token("Bearer   "), None);
        assert_eq!(extract_token("Basic abc"), None);
    }

    #[test]
    fn identity_uses_the_stored_role() {
        let now = chrono::Utc::now();
        let user = User {
            id: "u1".into(),
            nombre: "Ana".into(),
            email: "a@b.c".into(),
            password_hash: String::new(),
            rol: UserRole::Readonly,
            activo: true,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        };
        let identity = AuthenticatedUser::from_user(&user);
        assert_eq!(identity.user_id, "u1");
        assert!(!identity.rol.can_write());
        assert!(!identity.is_admin());
    }
}
