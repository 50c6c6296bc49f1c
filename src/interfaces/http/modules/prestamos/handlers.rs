use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    CreatePrestamoRequest, ListPrestamosParams, PrestamoDto, PrestamoResumenDto,
    UpdatePrestamoRequest,
};
use crate::domain::PrestamoFilter;
use crate::interfaces::http::common::{
    parse_optional, ApiResponse, ApiResult, EmptyData, ValidatedJson,
};
use crate::interfaces::http::AppState;

#[utoipa::path(
    get,
    path = "/api/prestamos",
    tag = "Prestamos",
    security(("bearer_auth" = [])),
    params(ListPrestamosParams),
    responses((status = 200, description = "Prestamo list", body = ApiResponse<Vec<PrestamoDto>>))
)]
pub async fn list_prestamos(
    State(state): State<AppState>,
    Query(params): Query<ListPrestamosParams>,
) -> ApiResult<Json<ApiResponse<Vec<PrestamoDto>>>> {
    let filter = PrestamoFilter {
        local_id: params.local_id,
        estado: parse_optional(params.estado.as_deref())?,
    };
    let prestamos = state.prestamos.list(filter).await?;
    Ok(Json(ApiResponse::success(
        prestamos.into_iter().map(PrestamoDto::from).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/prestamos/{id}",
    tag = "Prestamos",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Prestamo ID")),
    responses(
        (status = 200, description = "Prestamo", body = ApiResponse<PrestamoDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_prestamo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ApiResponse<PrestamoDto>>> {
    let prestamo = state.prestamos.get(id).await?;
    Ok(Json(ApiResponse::success(prestamo.into())))
}

#[utoipa::path(
    get,
    path = "/api/prestamos/{id}/resumen",
    tag = "Prestamos",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Prestamo ID")),
    responses(
        (status = 200, description = "Repayment summary", body = ApiResponse<PrestamoResumenDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_prestamo_resumen(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ApiResponse<PrestamoResumenDto>>> {
    let resumen = state.prestamos.resumen(id).await?;
    Ok(Json(ApiResponse::success(resumen.into())))
}

#[utoipa::path(
    post,
    path = "/api/prestamos",
    tag = "Prestamos",
    security(("bearer_auth" = [])),
    request_body = CreatePrestamoRequest,
    responses(
        (status = 201, description = "Prestamo created", body = ApiResponse<PrestamoDto>),
        (status = 404, description = "Local not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_prestamo(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreatePrestamoRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<PrestamoDto>>)> {
    let estado = parse_optional(req.estado.as_deref())?;
    let prestamo = state.prestamos.create(req.into_command(estado)).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(prestamo.into()))))
}

#[utoipa::path(
    put,
    path = "/api/prestamos/{id}",
    tag = "Prestamos",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Prestamo ID")),
    request_body = UpdatePrestamoRequest,
    responses(
        (status = 200, description = "Prestamo updated", body = ApiResponse<PrestamoDto>),
        (status = 404, description = "Not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_prestamo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdatePrestamoRequest>,
) -> ApiResult<Json<ApiResponse<PrestamoDto>>> {
    let estado = parse_optional(req.estado.as_deref())?;
    let prestamo = state.prestamos.update(id, req.into_command(estado)).await?;
    Ok(Json(ApiResponse::success(prestamo.into())))
}

#[utoipa::path(
    delete,
    path = "/api/prestamos/{id}",
    tag = "Prestamos",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Prestamo ID")),
    responses(
        (status = 200, description = "Prestamo deleted", body = ApiResponse<EmptyData>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Prestamo has gastos")
    )
)]
pub async fn delete_prestamo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ApiResponse<EmptyData>>> {
    state.prestamos.delete(id).await?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}
