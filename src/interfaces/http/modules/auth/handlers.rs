//! Authentication handlers: login, refresh, logout, profile and
//! password change. Delegates to `AuthService`.

use axum::{extract::State, Extension, Json};

use super::dto::{ChangePasswordRequest, LoginRequest, RefreshRequest, TokenResponse};
use crate::interfaces::http::common::{ApiResponse, ApiResult, EmptyData, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::interfaces::http::modules::users::dto::UserDto;
use crate::interfaces::http::AppState;

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token pair issued", body = ApiResponse<TokenResponse>),
        (status = 401, description = "Invalid credentials"),
        (status = 403, description = "Account disabled")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<ApiResponse<TokenResponse>>> {
    let tokens = state.auth.login(&req.email, &req.password).await?;
    Ok(Json(ApiResponse::success(tokens.into())))
}

#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "Authentication",
    request_body = RefreshRequest,
    responses(
        (status = 200, description = "Rotated token pair", body = ApiResponse<TokenResponse>),
        (status = 401, description = "Unknown or expired refresh token"),
        (status = 403, description = "Account disabled")
    )
)]
pub async fn refresh(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RefreshRequest>,
) -> ApiResult<Json<ApiResponse<TokenResponse>>> {
    let tokens = state.auth.refresh(&req.refresh_token).await?;
    Ok(Json(ApiResponse::success(tokens.into())))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "Authentication",
    request_body = RefreshRequest,
    responses((status = 200, description = "Refresh token revoked", body = ApiResponse<EmptyData>))
)]
pub async fn logout(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RefreshRequest>,
) -> ApiResult<Json<ApiResponse<EmptyData>>> {
    state.auth.logout(&req.refresh_token).await?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = ApiResponse<UserDto>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn me(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<Json<ApiResponse<UserDto>>> {
    let profile = state.auth.me(&user.user_id).await?;
    Ok(Json(ApiResponse::success(profile.into())))
}

#[utoipa::path(
    put,
    path = "/api/auth/change-password",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed; refresh tokens revoked", body = ApiResponse<EmptyData>),
        (status = 401, description = "Wrong current password"),
        (status = 422, description = "New password too short")
    )
)]
pub async fn change_password(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(req): ValidatedJson<ChangePasswordRequest>,
) -> ApiResult<Json<ApiResponse<EmptyData>>> {
    state
        .auth
        .change_password(&user.user_id, &req.current_password, &req.new_password)
        .await?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}
