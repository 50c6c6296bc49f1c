//! User management handlers (admin only)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{
    CreateUserRequest, ListUsersParams, ResetPasswordRequest, UpdateUserRequest, UserDto,
};
use crate::application::identity::{CreateUserCommand, ListUsersQuery, UpdateUserCommand};
use crate::domain::{UserFilter, UserRole};
use crate::interfaces::http::common::{
    parse_optional, ApiResponse, ApiResult, EmptyData, PaginatedResponse, ValidatedJson,
};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::interfaces::http::AppState;
use crate::shared::PaginationParams;

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(ListUsersParams),
    responses(
        (status = 200, description = "User list", body = ApiResponse<PaginatedResponse<UserDto>>),
        (status = 403, description = "Admin only")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<ListUsersParams>,
) -> ApiResult<Json<ApiResponse<PaginatedResponse<UserDto>>>> {
    let query = ListUsersQuery {
        filter: UserFilter {
            search: params.search,
            rol: parse_optional(params.rol.as_deref())?,
        },
        page: PaginationParams::new(params.page, params.limit),
    };
    let page = state.users.list(query).await?;
    Ok(Json(ApiResponse::success(PaginatedResponse::from_result(page))))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User", body = ApiResponse<UserDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<UserDto>>> {
    let user = state.users.get(&id).await?;
    Ok(Json(ApiResponse::success(user.into())))
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = ApiResponse<UserDto>),
        (status = 409, description = "Email already in use"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<UserDto>>)> {
    let rol: Option<UserRole> = parse_optional(req.rol.as_deref())?;
    let user = state
        .users
        .create(CreateUserCommand {
            nombre: req.nombre,
            email: req.email,
            password: req.password,
            rol: rol.unwrap_or_default(),
            activo: req.activo.unwrap_or(true),
        })
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(user.into()))))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<UserDto>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Email already in use")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<ApiResponse<UserDto>>> {
    let user = state
        .users
        .update(
            &id,
            UpdateUserCommand {
                nombre: req.nombre,
                email: req.email,
                rol: parse_optional(req.rol.as_deref())?,
                activo: req.activo,
            },
        )
        .await?;
    Ok(Json(ApiResponse::success(user.into())))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = ApiResponse<EmptyData>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Cannot delete yourself")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<EmptyData>>> {
    state.users.delete(&actor.user_id, &id).await?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}/password",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "User ID")),
    request_body = ResetPasswordRequest,
    responses(
        (status = 200, description = "Password reset; sessions revoked", body = ApiResponse<EmptyData>),
        (status = 404, description = "Not found")
    )
)]
pub async fn reset_password(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<ResetPasswordRequest>,
) -> ApiResult<Json<ApiResponse<EmptyData>>> {
    state.users.reset_password(&id, &req.password).await?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}
