use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    ContratoDto, CreateContratoRequest, FinalizarContratoRequest, ListContratosParams,
    ProximosVencerParams, UpdateContratoRequest,
};
use crate::application::contratos::ListContratosQuery;
use crate::domain::ContratoFilter;
use crate::interfaces::http::common::{
    parse_optional, ApiResponse, ApiResult, EmptyData, PaginatedResponse, ValidatedJson,
};
use crate::interfaces::http::modules::ingresos::dto::IngresoDto;
use crate::interfaces::http::AppState;
use crate::shared::PaginationParams;

#[utoipa::path(
    get,
    path = "/api/contratos",
    tag = "Contratos",
    security(("bearer_auth" = [])),
    params(ListContratosParams),
    responses(
        (status = 200, description = "Contrato list", body = ApiResponse<PaginatedResponse<ContratoDto>>),
        (status = 422, description = "Unknown estado")
    )
)]
pub async fn list_contratos(
    State(state): State<AppState>,
    Query(params): Query<ListContratosParams>,
) -> ApiResult<Json<ApiResponse<PaginatedResponse<ContratoDto>>>> {
    let query = ListContratosQuery {
        filter: ContratoFilter {
            cliente_id: params.cliente_id,
            trastero_id: params.trastero_id,
            estado: parse_optional(params.estado.as_deref())?,
        },
        page: PaginationParams::new(params.page, params.limit),
    };
    let page = state.contratos.list(query).await?;
    Ok(Json(ApiResponse::success(PaginatedResponse::from_result(page))))
}

#[utoipa::path(
    get,
    path = "/api/contratos/proximos-vencer",
    tag = "Contratos",
    security(("bearer_auth" = [])),
    params(ProximosVencerParams),
    responses(
        (status = 200, description = "Active contratos ending within the window", body = ApiResponse<Vec<ContratoDto>>),
        (status = 422, description = "dias out of range")
    )
)]
pub async fn proximos_vencer(
    State(state): State<AppState>,
    Query(params): Query<ProximosVencerParams>,
) -> ApiResult<Json<ApiResponse<Vec<ContratoDto>>>> {
    let contratos = state.contratos.proximos_vencer(params.dias()).await?;
    Ok(Json(ApiResponse::success(
        contratos.into_iter().map(ContratoDto::from).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/contratos/{id}",
    tag = "Contratos",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Contrato ID")),
    responses(
        (status = 200, description = "Contrato", body = ApiResponse<ContratoDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_contrato(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ApiResponse<ContratoDto>>> {
    let contrato = state.contratos.get(id).await?;
    Ok(Json(ApiResponse::success(contrato.into())))
}

#[utoipa::path(
    get,
    path = "/api/contratos/{id}/ingresos",
    tag = "Contratos",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Contrato ID")),
    responses(
        (status = 200, description = "Payments of the contrato", body = ApiResponse<Vec<IngresoDto>>),
        (status = 404, description = "Not found")
    )
)]
pub async fn list_contrato_ingresos(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ApiResponse<Vec<IngresoDto>>>> {
    let ingresos = state.contratos.ingresos(id).await?;
    Ok(Json(ApiResponse::success(
        ingresos.into_iter().map(IngresoDto::from).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/api/contratos",
    tag = "Contratos",
    security(("bearer_auth" = [])),
    request_body = CreateContratoRequest,
    responses(
        (status = 201, description = "Contrato created", body = ApiResponse<ContratoDto>),
        (status = 404, description = "Cliente or trastero not found"),
        (status = 409, description = "Trastero already rented in that period"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_contrato(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateContratoRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<ContratoDto>>)> {
    let estado = parse_optional(req.estado.as_deref())?;
    let contrato = state.contratos.create(req.into_command(estado)).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(contrato.into()))))
}

#[utoipa::path(
    put,
    path = "/api/contratos/{id}",
    tag = "Contratos",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Contrato ID")),
    request_body = UpdateContratoRequest,
    responses(
        (status = 200, description = "Contrato updated", body = ApiResponse<ContratoDto>),
        (status = 404, description = "Not found"),
        (status = 409, description = "New period overlaps another contrato")
    )
)]
pub async fn update_contrato(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdateContratoRequest>,
) -> ApiResult<Json<ApiResponse<ContratoDto>>> {
    let estado = parse_optional(req.estado.as_deref())?;
    let contrato = state.contratos.update(id, req.into_command(estado)).await?;
    Ok(Json(ApiResponse::success(contrato.into())))
}

#[utoipa::path(
    post,
    path = "/api/contratos/{id}/finalizar",
    tag = "Contratos",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Contrato ID")),
    request_body(content = FinalizarContratoRequest, description = "Optional end date"),
    responses(
        (status = 200, description = "Contrato finalized", body = ApiResponse<ContratoDto>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Contrato already closed")
    )
)]
pub async fn finalizar_contrato(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Option<Json<FinalizarContratoRequest>>,
) -> ApiResult<Json<ApiResponse<ContratoDto>>> {
    let req = body.map(|Json(r)| r).unwrap_or_default();
    let contrato = state.contratos.finalizar(id, req.into()).await?;
    Ok(Json(ApiResponse::success(contrato.into())))
}

#[utoipa::path(
    post,
    path = "/api/contratos/{id}/cancelar",
    tag = "Contratos",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Contrato ID")),
    responses(
        (status = 200, description = "Contrato cancelled", body = ApiResponse<ContratoDto>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Contrato already closed")
    )
)]
pub async fn cancelar_contrato(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ApiResponse<ContratoDto>>> {
    let contrato = state.contratos.cancelar(id).await?;
    Ok(Json(ApiResponse::success(contrato.into())))
}

#[utoipa::path(
    post,
    path = "/api/contratos/{id}/devolver-fianza",
    tag = "Contratos",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Contrato ID")),
    responses(
        (status = 200, description = "Deposit marked as returned", body = ApiResponse<ContratoDto>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Contrato still open or deposit already returned")
    )
)]
pub async fn devolver_fianza(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ApiResponse<ContratoDto>>> {
    let contrato = state.contratos.devolver_fianza(id).await?;
    Ok(Json(ApiResponse::success(contrato.into())))
}

#[utoipa::path(
    delete,
    path = "/api/contratos/{id}",
    tag = "Contratos",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Contrato ID")),
    responses(
        (status = 200, description = "Contrato deleted", body = ApiResponse<EmptyData>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Contrato has ingresos")
    )
)]
pub async fn delete_contrato(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ApiResponse<EmptyData>>> {
    state.contratos.delete(id).await?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}
