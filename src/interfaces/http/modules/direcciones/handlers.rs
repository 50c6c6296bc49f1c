use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{CreateDireccionRequest, DireccionDto, ListDireccionesParams, UpdateDireccionRequest};
use crate::interfaces::http::common::{ApiResponse, ApiResult, EmptyData, ValidatedJson};
use crate::interfaces::http::AppState;

#[utoipa::path(
    get,
    path = "/api/direcciones",
    tag = "Direcciones",
    security(("bearer_auth" = [])),
    params(ListDireccionesParams),
    responses((status = 200, description = "Direccion list", body = ApiResponse<Vec<DireccionDto>>))
)]
pub async fn list_direcciones(
    State(state): State<AppState>,
    Query(params): Query<ListDireccionesParams>,
) -> ApiResult<Json<ApiResponse<Vec<DireccionDto>>>> {
    let direcciones = state.direcciones.list(params.cliente_id).await?;
    Ok(Json(ApiResponse::success(
        direcciones.into_iter().map(DireccionDto::from).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/direcciones/{id}",
    tag = "Direcciones",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Direccion ID")),
    responses(
        (status = 200, description = "Direccion", body = ApiResponse<DireccionDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_direccion(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ApiResponse<DireccionDto>>> {
    let direccion = state.direcciones.get(id).await?;
    Ok(Json(ApiResponse::success(direccion.into())))
}

#[utoipa::path(
    post,
    path = "/api/direcciones",
    tag = "Direcciones",
    security(("bearer_auth" = [])),
    request_body = CreateDireccionRequest,
    responses(
        (status = 201, description = "Direccion created", body = ApiResponse<DireccionDto>),
        (status = 404, description = "Cliente not found"),
        (status = 422, description = "Invalid postal code")
    )
)]
pub async fn create_direccion(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateDireccionRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<DireccionDto>>)> {
    let direccion = state.direcciones.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(direccion.into()))))
}

#[utoipa::path(
    put,
    path = "/api/direcciones/{id}",
    tag = "Direcciones",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Direccion ID")),
    request_body = UpdateDireccionRequest,
    responses(
        (status = 200, description = "Direccion updated", body = ApiResponse<DireccionDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_direccion(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdateDireccionRequest>,
) -> ApiResult<Json<ApiResponse<DireccionDto>>> {
    let direccion = state.direcciones.update(id, req.into()).await?;
    Ok(Json(ApiResponse::success(direccion.into())))
}

#[utoipa::path(
    delete,
    path = "/api/direcciones/{id}",
    tag = "Direcciones",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Direccion ID")),
    responses(
        (status = 200, description = "Direccion deleted", body = ApiResponse<EmptyData>),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_direccion(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ApiResponse<EmptyData>>> {
    state.direcciones.delete(id).await?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}
