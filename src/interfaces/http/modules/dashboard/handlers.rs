//! Dashboard handlers (read only)

use axum::{
    extract::{Query, State},
    Json,
};

use super::dto::{
    ContratoVencimientoDto, DashboardStatsDto, OcupacionLocalDto, PeriodoParams,
    RentabilidadLocalDto, ResumenFinancieroDto,
};
use crate::application::today;
use crate::interfaces::http::modules::contratos::dto::ProximosVencerParams;
use crate::interfaces::http::common::{ApiResponse, ApiResult};
use crate::interfaces::http::AppState;

#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = "Dashboard",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Headline figures", body = ApiResponse<DashboardStatsDto>))
)]
pub async fn get_stats(State(state): State<AppState>) -> ApiResult<Json<ApiResponse<DashboardStatsDto>>> {
    let stats = state.dashboard.stats().await?;
    Ok(Json(ApiResponse::success(stats.into())))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/ocupacion",
    tag = "Dashboard",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Occupancy per local", body = ApiResponse<Vec<OcupacionLocalDto>>))
)]
pub async fn get_ocupacion(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<OcupacionLocalDto>>>> {
    let ocupacion = state.dashboard.ocupacion().await?;
    Ok(Json(ApiResponse::success(
        ocupacion.into_iter().map(OcupacionLocalDto::from).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/financiero",
    tag = "Dashboard",
    security(("bearer_auth" = [])),
    params(PeriodoParams),
    responses(
        (status = 200, description = "Ingresos and gastos by month", body = ApiResponse<ResumenFinancieroDto>),
        (status = 422, description = "Invalid period")
    )
)]
pub async fn get_financiero(
    State(state): State<AppState>,
    Query(params): Query<PeriodoParams>,
) -> ApiResult<Json<ApiResponse<ResumenFinancieroDto>>> {
    let resumen = state.dashboard.financiero(params.desde, params.hasta).await?;
    Ok(Json(ApiResponse::success(resumen.into())))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/rentabilidad",
    tag = "Dashboard",
    security(("bearer_auth" = [])),
    params(PeriodoParams),
    responses(
        (status = 200, description = "Result per local", body = ApiResponse<Vec<RentabilidadLocalDto>>),
        (status = 422, description = "Invalid period")
    )
)]
pub async fn get_rentabilidad(
    State(state): State<AppState>,
    Query(params): Query<PeriodoParams>,
) -> ApiResult<Json<ApiResponse<Vec<RentabilidadLocalDto>>>> {
    let locales = state.dashboard.rentabilidad(params.desde, params.hasta).await?;
    Ok(Json(ApiResponse::success(
        locales.into_iter().map(RentabilidadLocalDto::from).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/contratos-proximos-vencer",
    tag = "Dashboard",
    security(("bearer_auth" = [])),
    params(ProximosVencerParams),
    responses(
        (status = 200, description = "Contratos ending soon", body = ApiResponse<Vec<ContratoVencimientoDto>>),
        (status = 422, description = "dias outside 0..=365")
    )
)]
pub async fn get_contratos_proximos_vencer(
    State(state): State<AppState>,
    Query(params): Query<ProximosVencerParams>,
) -> ApiResult<Json<ApiResponse<Vec<ContratoVencimientoDto>>>> {
    let contratos = state.contratos.proximos_vencer(params.dias()).await?;
    let hoy = today();
    Ok(Json(ApiResponse::success(
        contratos
            .into_iter()
            .map(|c| ContratoVencimientoDto::new(c, hoy))
            .collect(),
    )))
}
