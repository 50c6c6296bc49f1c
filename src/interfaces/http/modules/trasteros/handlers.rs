use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    CambiarEstadoRequest, CreateTrasteroRequest, DisponiblesParams, ListTrasterosParams,
    TrasteroDto, UpdateTrasteroRequest,
};
use crate::application::trasteros::{DisponiblesQuery, ListTrasterosQuery};
use crate::domain::{TrasteroEstado, TrasteroFilter};
use crate::interfaces::http::common::{
    parse_optional, ApiResponse, ApiResult, DeleteOutcomeDto, PaginatedResponse, ValidatedJson,
};
use crate::interfaces::http::AppState;
use crate::shared::PaginationParams;

#[utoipa::path(
    get,
    path = "/api/trasteros",
    tag = "Trasteros",
    security(("bearer_auth" = [])),
    params(ListTrasterosParams),
    responses(
        (status = 200, description = "Trastero list", body = ApiResponse<PaginatedResponse<TrasteroDto>>),
        (status = 422, description = "Unknown estado")
    )
)]
pub async fn list_trasteros(
    State(state): State<AppState>,
    Query(params): Query<ListTrasterosParams>,
) -> ApiResult<Json<ApiResponse<PaginatedResponse<TrasteroDto>>>> {
    let query = ListTrasterosQuery {
        filter: TrasteroFilter {
            local_id: params.local_id,
            estado: parse_optional(params.estado.as_deref())?,
            activo: params.activo,
        },
        page: PaginationParams::new(params.page, params.limit),
    };
    let page = state.trasteros.list(query).await?;
    Ok(Json(ApiResponse::success(PaginatedResponse::from_result(page))))
}

#[utoipa::path(
    get,
    path = "/api/trasteros/disponibles",
    tag = "Trasteros",
    security(("bearer_auth" = [])),
    params(DisponiblesParams),
    responses(
        (status = 200, description = "Trasteros free for the whole period", body = ApiResponse<Vec<TrasteroDto>>),
        (status = 422, description = "Invalid period")
    )
)]
pub async fn list_disponibles(
    State(state): State<AppState>,
    Query(params): Query<DisponiblesParams>,
) -> ApiResult<Json<ApiResponse<Vec<TrasteroDto>>>> {
    let trasteros = state
        .trasteros
        .disponibles(DisponiblesQuery {
            fecha_inicio: params.fecha_inicio,
            fecha_fin: params.fecha_fin,
            local_id: params.local_id,
        })
        .await?;
    Ok(Json(ApiResponse::success(
        trasteros.into_iter().map(TrasteroDto::from).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/trasteros/{id}",
    tag = "Trasteros",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Trastero ID")),
    responses(
        (status = 200, description = "Trastero", body = ApiResponse<TrasteroDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_trastero(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ApiResponse<TrasteroDto>>> {
    let trastero = state.trasteros.get(id).await?;
    Ok(Json(ApiResponse::success(trastero.into())))
}

#[utoipa::path(
    post,
    path = "/api/trasteros",
    tag = "Trasteros",
    security(("bearer_auth" = [])),
    request_body = CreateTrasteroRequest,
    responses(
        (status = 201, description = "Trastero created", body = ApiResponse<TrasteroDto>),
        (status = 404, description = "Local not found"),
        (status = 409, description = "Numero already used in the local")
    )
)]
pub async fn create_trastero(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateTrasteroRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<TrasteroDto>>)> {
    let estado = parse_optional::<TrasteroEstado>(req.estado.as_deref())?;
    let trastero = state.trasteros.create(req.into_command(estado)).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(trastero.into()))))
}

#[utoipa::path(
    put,
    path = "/api/trasteros/{id}",
    tag = "Trasteros",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Trastero ID")),
    request_body = UpdateTrasteroRequest,
    responses(
        (status = 200, description = "Trastero updated", body = ApiResponse<TrasteroDto>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Numero already used in the local")
    )
)]
pub async fn update_trastero(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdateTrasteroRequest>,
) -> ApiResult<Json<ApiResponse<TrasteroDto>>> {
    let trastero = state.trasteros.update(id, req.into()).await?;
    Ok(Json(ApiResponse::success(trastero.into())))
}

#[utoipa::path(
    patch,
    path = "/api/trasteros/{id}/estado",
    tag = "Trasteros",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Trastero ID")),
    request_body = CambiarEstadoRequest,
    responses(
        (status = 200, description = "Estado changed", body = ApiResponse<TrasteroDto>),
        (status = 404, description = "Not found"),
        (status = 409, description = "An active contrato holds the trastero"),
        (status = 422, description = "Unknown estado")
    )
)]
pub async fn cambiar_estado(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<CambiarEstadoRequest>,
) -> ApiResult<Json<ApiResponse<TrasteroDto>>> {
    let estado: TrasteroEstado = req.estado.trim().parse()?;
    let trastero = state.trasteros.set_estado(id, estado).await?;
    Ok(Json(ApiResponse::success(trastero.into())))
}

#[utoipa::path(
    delete,
    path = "/api/trasteros/{id}",
    tag = "Trasteros",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Trastero ID")),
    responses(
        (status = 200, description = "Deleted, or deactivated when it has contratos", body = ApiResponse<DeleteOutcomeDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_trastero(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ApiResponse<DeleteOutcomeDto>>> {
    let outcome = state.trasteros.delete(id).await?;
    Ok(Json(ApiResponse::success(outcome.into())))
}
