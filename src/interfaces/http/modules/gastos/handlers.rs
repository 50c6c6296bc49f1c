use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{CreateGastoRequest, GastoDto, ListGastosParams, UpdateGastoRequest};
use crate::application::gastos::ListGastosQuery;
use crate::domain::{DateFilter, GastoFilter};
use crate::interfaces::http::common::{
    parse_optional, ApiResponse, ApiResult, EmptyData, PaginatedResponse, ValidatedJson,
};
use crate::interfaces::http::AppState;
use crate::shared::PaginationParams;

#[utoipa::path(
    get,
    path = "/api/gastos",
    tag = "Gastos",
    security(("bearer_auth" = [])),
    params(ListGastosParams),
    responses(
        (status = 200, description = "Gasto list", body = ApiResponse<PaginatedResponse<GastoDto>>),
        (status = 422, description = "Invalid filter")
    )
)]
pub async fn list_gastos(
    State(state): State<AppState>,
    Query(params): Query<ListGastosParams>,
) -> ApiResult<Json<ApiResponse<PaginatedResponse<GastoDto>>>> {
    let query = ListGastosQuery {
        filter: GastoFilter {
            local_id: params.local_id,
            prestamo_id: params.prestamo_id,
            categoria: parse_optional(params.categoria.as_deref())?,
            fechas: DateFilter::new(params.desde, params.hasta)?,
        },
        page: PaginationParams::new(params.page, params.limit),
    };
    let page = state.gastos.list(query).await?;
    Ok(Json(ApiResponse::success(PaginatedResponse::from_result(page))))
}

#[utoipa::path(
    get,
    path = "/api/gastos/{id}",
    tag = "Gastos",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Gasto ID")),
    responses(
        (status = 200, description = "Gasto", body = ApiResponse<GastoDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_gasto(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ApiResponse<GastoDto>>> {
    let gasto = state.gastos.get(id).await?;
    Ok(Json(ApiResponse::success(gasto.into())))
}

#[utoipa::path(
    post,
    path = "/api/gastos",
    tag = "Gastos",
    security(("bearer_auth" = [])),
    request_body = CreateGastoRequest,
    responses(
        (status = 201, description = "Gasto created", body = ApiResponse<GastoDto>),
        (status = 404, description = "Local or prestamo not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_gasto(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateGastoRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<GastoDto>>)> {
    let categoria = parse_optional(req.categoria.as_deref())?;
    let metodo_pago = parse_optional(req.metodo_pago.as_deref())?;
    let gasto = state
        .gastos
        .create(req.into_command(categoria, metodo_pago))
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(gasto.into()))))
}

#[utoipa::path(
    put,
    path = "/api/gastos/{id}",
    tag = "Gastos",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Gasto ID")),
    request_body = UpdateGastoRequest,
    responses(
        (status = 200, description = "Gasto updated", body = ApiResponse<GastoDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_gasto(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdateGastoRequest>,
) -> ApiResult<Json<ApiResponse<GastoDto>>> {
    let categoria = parse_optional(req.categoria.as_deref())?;
    let metodo_pago = parse_optional(req.metodo_pago.as_deref())?;
    let gasto = state
        .gastos
        .update(id, req.into_command(categoria, metodo_pago))
        .await?;
    Ok(Json(ApiResponse::success(gasto.into())))
}

#[utoipa::path(
    delete,
    path = "/api/gastos/{id}",
    tag = "Gastos",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Gasto ID")),
    responses(
        (status = 200, description = "Gasto deleted", body = ApiResponse<EmptyData>),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_gasto(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ApiResponse<EmptyData>>> {
    state.gastos.delete(id).await?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}
