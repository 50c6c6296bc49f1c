use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{CreateLocalRequest, LocalDto, UpdateLocalRequest};
use crate::interfaces::http::common::{ApiResponse, ApiResult, EmptyData, ValidatedJson};
use crate::interfaces::http::modules::trasteros::dto::TrasteroDto;
use crate::interfaces::http::AppState;

#[utoipa::path(
    get,
    path = "/api/locales",
    tag = "Locales",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Local list", body = ApiResponse<Vec<LocalDto>>))
)]
pub async fn list_locales(State(state): State<AppState>) -> ApiResult<Json<ApiResponse<Vec<LocalDto>>>> {
    let locales = state.locales.list().await?;
    Ok(Json(ApiResponse::success(
        locales.into_iter().map(LocalDto::from).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/locales/{id}",
    tag = "Locales",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Local ID")),
    responses(
        (status = 200, description = "Local", body = ApiResponse<LocalDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_local(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ApiResponse<LocalDto>>> {
    let local = state.locales.get(id).await?;
    Ok(Json(ApiResponse::success(local.into())))
}

#[utoipa::path(
    get,
    path = "/api/locales/{id}/trasteros",
    tag = "Locales",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Local ID")),
    responses(
        (status = 200, description = "Trasteros in the local", body = ApiResponse<Vec<TrasteroDto>>),
        (status = 404, description = "Not found")
    )
)]
pub async fn list_local_trasteros(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ApiResponse<Vec<TrasteroDto>>>> {
    let trasteros = state.locales.trasteros(id).await?;
    Ok(Json(ApiResponse::success(
        trasteros.into_iter().map(TrasteroDto::from).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/api/locales",
    tag = "Locales",
    security(("bearer_auth" = [])),
    request_body = CreateLocalRequest,
    responses(
        (status = 201, description = "Local created", body = ApiResponse<LocalDto>),
        (status = 404, description = "Direccion not found"),
        (status = 409, description = "Duplicate nombre")
    )
)]
pub async fn create_local(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateLocalRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<LocalDto>>)> {
    let local = state.locales.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(local.into()))))
}

#[utoipa::path(
    put,
    path = "/api/locales/{id}",
    tag = "Locales",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Local ID")),
    request_body = UpdateLocalRequest,
    responses(
        (status = 200, description = "Local updated", body = ApiResponse<LocalDto>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Duplicate nombre")
    )
)]
pub async fn update_local(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdateLocalRequest>,
) -> ApiResult<Json<ApiResponse<LocalDto>>> {
    let local = state.locales.update(id, req.into()).await?;
    Ok(Json(ApiResponse::success(local.into())))
}

#[utoipa::path(
    delete,
    path = "/api/locales/{id}",
    tag = "Locales",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Local ID")),
    responses(
        (status = 200, description = "Local deleted", body = ApiResponse<EmptyData>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Local still has trasteros")
    )
)]
pub async fn delete_local(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ApiResponse<EmptyData>>> {
    state.locales.delete(id).await?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}
