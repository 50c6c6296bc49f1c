//! Cliente handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{ClienteDto, CreateClienteRequest, ListClientesParams, UpdateClienteRequest};
use crate::application::clientes::ListClientesQuery;
use crate::domain::ClienteFilter;
use crate::interfaces::http::common::{
    ApiResponse, ApiResult, DeleteOutcomeDto, PaginatedResponse, ValidatedJson,
};
use crate::interfaces::http::modules::contratos::dto::ContratoDto;
use crate::interfaces::http::AppState;
use crate::shared::PaginationParams;

#[utoipa::path(
    get,
    path = "/api/clientes",
    tag = "Clientes",
    security(("bearer_auth" = [])),
    params(ListClientesParams),
    responses((status = 200, description = "Cliente list", body = ApiResponse<PaginatedResponse<ClienteDto>>))
)]
pub async fn list_clientes(
    State(state): State<AppState>,
    Query(params): Query<ListClientesParams>,
) -> ApiResult<Json<ApiResponse<PaginatedResponse<ClienteDto>>>> {
    let page = state
        .clientes
        .list(ListClientesQuery {
            filter: ClienteFilter {
                search: params.search,
                activo: params.activo,
            },
            page: PaginationParams::new(params.page, params.limit),
        })
        .await?;
    Ok(Json(ApiResponse::success(PaginatedResponse::from_result(page))))
}

#[utoipa::path(
    get,
    path = "/api/clientes/{id}",
    tag = "Clientes",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Cliente ID")),
    responses(
        (status = 200, description = "Cliente", body = ApiResponse<ClienteDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_cliente(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ApiResponse<ClienteDto>>> {
    let cliente = state.clientes.get(id).await?;
    Ok(Json(ApiResponse::success(cliente.into())))
}

#[utoipa::path(
    get,
    path = "/api/clientes/{id}/contratos",
    tag = "Clientes",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Cliente ID")),
    responses(
        (status = 200, description = "Contratos of the cliente", body = ApiResponse<Vec<ContratoDto>>),
        (status = 404, description = "Not found")
    )
)]
pub async fn list_cliente_contratos(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ApiResponse<Vec<ContratoDto>>>> {
    let contratos = state.clientes.contratos(id).await?;
    Ok(Json(ApiResponse::success(
        contratos.into_iter().map(ContratoDto::from).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/api/clientes",
    tag = "Clientes",
    security(("bearer_auth" = [])),
    request_body = CreateClienteRequest,
    responses(
        (status = 201, description = "Cliente created", body = ApiResponse<ClienteDto>),
        (status = 409, description = "Duplicate DNI/NIE or email"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_cliente(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateClienteRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<ClienteDto>>)> {
    let cliente = state.clientes.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(cliente.into()))))
}

#[utoipa::path(
    put,
    path = "/api/clientes/{id}",
    tag = "Clientes",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Cliente ID")),
    request_body = UpdateClienteRequest,
    responses(
        (status = 200, description = "Cliente updated", body = ApiResponse<ClienteDto>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Duplicate DNI/NIE or email")
    )
)]
pub async fn update_cliente(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdateClienteRequest>,
) -> ApiResult<Json<ApiResponse<ClienteDto>>> {
    let cliente = state.clientes.update(id, req.into()).await?;
    Ok(Json(ApiResponse::success(cliente.into())))
}

#[utoipa::path(
    delete,
    path = "/api/clientes/{id}",
    tag = "Clientes",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Cliente ID")),
    responses(
        (status = 200, description = "Deleted, or deactivated when it has contratos", body = ApiResponse<DeleteOutcomeDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_cliente(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ApiResponse<DeleteOutcomeDto>>> {
    let outcome = state.clientes.delete(id).await?;
    Ok(Json(ApiResponse::success(outcome.into())))
}
