use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{CreateIngresoRequest, IngresoDto, ListIngresosParams, UpdateIngresoRequest};
use crate::application::ingresos::ListIngresosQuery;
use crate::domain::{DateFilter, IngresoFilter, MetodoPago};
use crate::interfaces::http::common::{
    parse_optional, ApiResponse, ApiResult, EmptyData, PaginatedResponse, ValidatedJson,
};
use crate::interfaces::http::AppState;
use crate::shared::PaginationParams;

#[utoipa::path(
    get,
    path = "/api/ingresos",
    tag = "Ingresos",
    security(("bearer_auth" = [])),
    params(ListIngresosParams),
    responses(
        (status = 200, description = "Ingreso list", body = ApiResponse<PaginatedResponse<IngresoDto>>),
        (status = 422, description = "Invalid filter")
    )
)]
pub async fn list_ingresos(
    State(state): State<AppState>,
    Query(params): Query<ListIngresosParams>,
) -> ApiResult<Json<ApiResponse<PaginatedResponse<IngresoDto>>>> {
    let query = ListIngresosQuery {
        filter: IngresoFilter {
            contrato_id: params.contrato_id,
            categoria: parse_optional(params.categoria.as_deref())?,
            fechas: DateFilter::new(params.desde, params.hasta)?,
        },
        page: PaginationParams::new(params.page, params.limit),
    };
    let page = state.ingresos.list(query).await?;
    Ok(Json(ApiResponse::success(PaginatedResponse::from_result(page))))
}

#[utoipa::path(
    get,
    path = "/api/ingresos/{id}",
    tag = "Ingresos",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Ingreso ID")),
    responses(
        (status = 200, description = "Ingreso", body = ApiResponse<IngresoDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_ingreso(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ApiResponse<IngresoDto>>> {
    let ingreso = state.ingresos.get(id).await?;
    Ok(Json(ApiResponse::success(ingreso.into())))
}

#[utoipa::path(
    post,
    path = "/api/ingresos",
    tag = "Ingresos",
    security(("bearer_auth" = [])),
    request_body = CreateIngresoRequest,
    responses(
        (status = 201, description = "Ingreso registered", body = ApiResponse<IngresoDto>),
        (status = 404, description = "Contrato not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_ingreso(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateIngresoRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<IngresoDto>>)> {
    let metodo_pago: MetodoPago = req.metodo_pago.trim().parse()?;
    let categoria = parse_optional(req.categoria.as_deref())?;
    let ingreso = state
        .ingresos
        .create(req.into_command(metodo_pago, categoria))
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(ingreso.into()))))
}

#[utoipa::path(
    put,
    path = "/api/ingresos/{id}",
    tag = "Ingresos",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Ingreso ID")),
    request_body = UpdateIngresoRequest,
    responses(
        (status = 200, description = "Ingreso updated", body = ApiResponse<IngresoDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_ingreso(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdateIngresoRequest>,
) -> ApiResult<Json<ApiResponse<IngresoDto>>> {
    let metodo_pago = parse_optional(req.metodo_pago.as_deref())?;
    let categoria = parse_optional(req.categoria.as_deref())?;
    let ingreso = state
        .ingresos
        .update(id, req.into_command(metodo_pago, categoria))
        .await?;
    Ok(Json(ApiResponse::success(ingreso.into())))
}

#[utoipa::path(
    delete,
    path = "/api/ingresos/{id}",
    tag = "Ingresos",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Ingreso ID")),
    responses(
        (status = 200, description = "Ingreso deleted", body = ApiResponse<EmptyData>),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_ingreso(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ApiResponse<EmptyData>>> {
    state.ingresos.delete(id).await?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}
