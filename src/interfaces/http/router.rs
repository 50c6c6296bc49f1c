//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    http::HeaderValue,
    middleware,
    routing::{get, patch, post, put},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use super::common::{ApiResponse, DeleteOutcomeDto, EmptyData, PaginatedResponse};
use super::middleware::{admin_middleware, auth_middleware, require_write, AuthState};
use super::modules::{
    auth, clientes, contratos, dashboard, direcciones, gastos, health, ingresos, locales,
    metrics::{http_metrics_middleware, prometheus_metrics, MetricsState},
    prestamos,
    request_id::request_id_middleware,
    trasteros, users,
};
use crate::application::{
    AuthService, ClienteService, ContratoService, DashboardService, DireccionService,
    GastoService, IngresoService, LocalService, PrestamoService, SharedEventBus,
    TrasteroService, UserService,
};
use crate::domain::RepositoryProvider;

/// Shared state for every handler. Services are cheap to clone behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub started_at: Arc<Instant>,
    pub auth: Arc<AuthService>,
    pub users: Arc<UserService>,
    pub clientes: Arc<ClienteService>,
    pub direcciones: Arc<DireccionService>,
    pub locales: Arc<LocalService>,
    pub trasteros: Arc<TrasteroService>,
    pub contratos: Arc<ContratoService>,
    pub ingresos: Arc<IngresoService>,
    pub gastos: Arc<GastoService>,
    pub prestamos: Arc<PrestamoService>,
    pub dashboard: Arc<DashboardService>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        repos: Arc<dyn RepositoryProvider>,
        events: SharedEventBus,
        auth: Arc<AuthService>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            db,
            started_at: Arc::new(Instant::now()),
            auth,
            users: Arc::new(UserService::new(repos.clone(), bcrypt_cost)),
            clientes: Arc::new(ClienteService::new(repos.clone(), events.clone())),
            direcciones: Arc::new(DireccionService::new(repos.clone())),
            locales: Arc::new(LocalService::new(repos.clone())),
            trasteros: Arc::new(TrasteroService::new(repos.clone(), events.clone())),
            contratos: Arc::new(ContratoService::new(repos.clone(), events.clone())),
            ingresos: Arc::new(IngresoService::new(repos.clone(), events)),
            gastos: Arc::new(GastoService::new(repos.clone())),
            prestamos: Arc::new(PrestamoService::new(repos.clone())),
            dashboard: Arc::new(DashboardService::new(repos)),
        }
    }
}

impl FromRef<AppState> for AuthState {
    fn from_ref(s: &AppState) -> Self {
        AuthState {
            jwt_config: s.auth.jwt_config().clone(),
            auth: s.auth.clone(),
        }
    }
}

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT access token from /api/auth/login"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::health_check,
        // Auth
        auth::handlers::login,
        auth::handlers::refresh,
        auth::handlers::logout,
        auth::handlers::me,
        auth::handlers::change_password,
        // Users
        users::handlers::list_users,
        users::handlers::get_user,
        users::handlers::create_user,
        users::handlers::update_user,
        users::handlers::delete_user,
        users::handlers::reset_password,
        // Clientes
        clientes::handlers::list_clientes,
        clientes::handlers::get_cliente,
        clientes::handlers::list_cliente_contratos,
        clientes::handlers::create_cliente,
        clientes::handlers::update_cliente,
        clientes::handlers::delete_cliente,
        // Direcciones
        direcciones::handlers::list_direcciones,
        direcciones::handlers::get_direccion,
        direcciones::handlers::create_direccion,
        direcciones::handlers::update_direccion,
        direcciones::handlers::delete_direccion,
        // Locales
        locales::handlers::list_locales,
        locales::handlers::get_local,
        locales::handlers::list_local_trasteros,
        locales::handlers::create_local,
        locales::handlers::update_local,
        locales::handlers::delete_local,
        // Trasteros
        trasteros::handlers::list_trasteros,
        trasteros::handlers::list_disponibles,
        trasteros::handlers::get_trastero,
        trasteros::handlers::create_trastero,
        trasteros::handlers::update_trastero,
        trasteros::handlers::cambiar_estado,
        trasteros::handlers::delete_trastero,
        // Contratos
        contratos::handlers::list_contratos,
        contratos::handlers::proximos_vencer,
        contratos::handlers::get_contrato,
        contratos::handlers::list_contrato_ingresos,
        contratos::handlers::create_contrato,
        contratos::handlers::update_contrato,
        contratos::handlers::finalizar_contrato,
        contratos::handlers::cancelar_contrato,
        contratos::handlers::devolver_fianza,
        contratos::handlers::delete_contrato,
        // Ingresos
        ingresos::handlers::list_ingresos,
        ingresos::handlers::get_ingreso,
        ingresos::handlers::create_ingreso,
        ingresos::handlers::update_ingreso,
        ingresos::handlers::delete_ingreso,
        // Gastos
        gastos::handlers::list_gastos,
        gastos::handlers::get_gasto,
        gastos::handlers::create_gasto,
        gastos::handlers::update_gasto,
        gastos::handlers::delete_gasto,
        // Prestamos
        prestamos::handlers::list_prestamos,
        prestamos::handlers::get_prestamo,
        prestamos::handlers::get_prestamo_resumen,
        prestamos::handlers::create_prestamo,
        prestamos::handlers::update_prestamo,
        prestamos::handlers::delete_prestamo,
        // Dashboard
        dashboard::handlers::get_stats,
        dashboard::handlers::get_ocupacion,
        dashboard::handlers::get_financiero,
        dashboard::handlers::get_rentabilidad,
        dashboard::handlers::get_contratos_proximos_vencer,
    ),
    components(
        schemas(
            // Common
            ApiResponse<EmptyData>,
            EmptyData,
            DeleteOutcomeDto,
            // Health
            health::HealthResponse,
            health::ComponentHealth,
            // Auth
            auth::dto::LoginRequest,
            auth::dto::RefreshRequest,
            auth::dto::ChangePasswordRequest,
            auth::dto::TokenResponse,
            // Users
            users::dto::UserDto,
            users::dto::CreateUserRequest,
            users::dto::UpdateUserRequest,
            users::dto::ResetPasswordRequest,
            PaginatedResponse<users::dto::UserDto>,
            // Clientes
            clientes::dto::ClienteDto,
            clientes::dto::CreateClienteRequest,
            clientes::dto::UpdateClienteRequest,
            PaginatedResponse<clientes::dto::ClienteDto>,
            // Direcciones
            direcciones::dto::DireccionDto,
            direcciones::dto::CreateDireccionRequest,
            direcciones::dto::UpdateDireccionRequest,
            // Locales
            locales::dto::LocalDto,
            locales::dto::CreateLocalRequest,
            locales::dto::UpdateLocalRequest,
            // Trasteros
            trasteros::dto::TrasteroDto,
            trasteros::dto::CreateTrasteroRequest,
            trasteros::dto::UpdateTrasteroRequest,
            trasteros::dto::CambiarEstadoRequest,
            PaginatedResponse<trasteros::dto::TrasteroDto>,
            // Contratos
            contratos::dto::ContratoDto,
            contratos::dto::CreateContratoRequest,
            contratos::dto::UpdateContratoRequest,
            contratos::dto::FinalizarContratoRequest,
            PaginatedResponse<contratos::dto::ContratoDto>,
            // Ingresos
            ingresos::dto::IngresoDto,
            ingresos::dto::CreateIngresoRequest,
            ingresos::dto::UpdateIngresoRequest,
            PaginatedResponse<ingresos::dto::IngresoDto>,
            // Gastos
            gastos::dto::GastoDto,
            gastos::dto::CreateGastoRequest,
            gastos::dto::UpdateGastoRequest,
            PaginatedResponse<gastos::dto::GastoDto>,
            // Prestamos
            prestamos::dto::PrestamoDto,
            prestamos::dto::PrestamoResumenDto,
            prestamos::dto::CreatePrestamoRequest,
            prestamos::dto::UpdatePrestamoRequest,
            // Dashboard
            dashboard::dto::DashboardStatsDto,
            dashboard::dto::OcupacionCountsDto,
            dashboard::dto::OcupacionLocalDto,
            dashboard::dto::MesFinancieroDto,
            dashboard::dto::ResumenFinancieroDto,
            dashboard::dto::RentabilidadLocalDto,
            dashboard::dto::ContratoVencimientoDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness and database check"),
        (name = "Authentication", description = "Login, refresh-token rotation, logout, password change"),
        (name = "Users", description = "Back-office user management (admin only)"),
        (name = "Clientes", description = "Tenants renting trasteros"),
        (name = "Direcciones", description = "Postal addresses of clientes and locales"),
        (name = "Locales", description = "Properties hosting trasteros"),
        (name = "Trasteros", description = "Storage units, estado and availability"),
        (name = "Contratos", description = "Rental agreements"),
        (name = "Ingresos", description = "Payments received against contratos"),
        (name = "Gastos", description = "Expenses per local"),
        (name = "Prestamos", description = "Bank loans financing locales"),
        (name = "Dashboard", description = "Occupancy and financial aggregates"),
    ),
    info(
        title = "Trastero Admin API",
        version = "1.0.0",
        description = "REST API for managing storage-unit rentals: clientes, trasteros, contratos and finances",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

fn cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return base.allow_origin(Any);
    }
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    base.allow_origin(AllowOrigin::list(parsed))
}

/// Create the API router with all routes.
///
/// `/metrics` is only mounted when a Prometheus handle is given.
pub fn create_api_router(
    state: AppState,
    metrics_handle: Option<PrometheusHandle>,
    cors_origins: &[String],
) -> Router {
    let auth_state = AuthState::from_ref(&state);

    // Auth routes (public)
    let auth_routes = Router::new()
        .route("/login", post(auth::handlers::login))
        .route("/refresh", post(auth::handlers::refresh))
        .route("/logout", post(auth::handlers::logout));

    // Auth routes (protected)
    let auth_protected_routes = Router::new()
        .route("/me", get(auth::handlers::me))
        .route("/change-password", put(auth::handlers::change_password))
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ));

    // User management (admin only)
    let user_routes = Router::new()
        .route(
            "/",
            get(users::handlers::list_users).post(users::handlers::create_user),
        )
        .route(
            "/{id}",
            get(users::handlers::get_user)
                .put(users::handlers::update_user)
                .delete(users::handlers::delete_user),
        )
        .route("/{id}/password", put(users::handlers::reset_password))
        .layer(middleware::from_fn(admin_middleware))
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ));

    let cliente_routes = Router::new()
        .route(
            "/",
            get(clientes::handlers::list_clientes).post(clientes::handlers::create_cliente),
        )
        .route(
            "/{id}",
            get(clientes::handlers::get_cliente)
                .put(clientes::handlers::update_cliente)
                .delete(clientes::handlers::delete_cliente),
        )
        .route("/{id}/contratos", get(clientes::handlers::list_cliente_contratos));

    let direccion_routes = Router::new()
        .route(
            "/",
            get(direcciones::handlers::list_direcciones)
                .post(direcciones::handlers::create_direccion),
        )
        .route(
            "/{id}",
            get(direcciones::handlers::get_direccion)
                .put(direcciones::handlers::update_direccion)
                .delete(direcciones::handlers::delete_direccion),
        );

    let local_routes = Router::new()
        .route(
            "/",
            get(locales::handlers::list_locales).post(locales::handlers::create_local),
        )
        .route(
            "/{id}",
            get(locales::handlers::get_local)
                .put(locales::handlers::update_local)
                .delete(locales::handlers::delete_local),
        )
        .route("/{id}/trasteros", get(locales::handlers::list_local_trasteros));

    let trastero_routes = Router::new()
        .route(
            "/",
            get(trasteros::handlers::list_trasteros).post(trasteros::handlers::create_trastero),
        )
        .route("/disponibles", get(trasteros::handlers::list_disponibles))
        .route(
            "/{id}",
            get(trasteros::handlers::get_trastero)
                .put(trasteros::handlers::update_trastero)
                .delete(trasteros::handlers::delete_trastero),
        )
        .route("/{id}/estado", patch(trasteros::handlers::cambiar_estado));

    let contrato_routes = Router::new()
        .route(
            "/",
            get(contratos::handlers::list_contratos).post(contratos::handlers::create_contrato),
        )
        .route("/proximos-vencer", get(contratos::handlers::proximos_vencer))
        .route(
            "/{id}",
            get(contratos::handlers::get_contrato)
                .put(contratos::handlers::update_contrato)
                .delete(contratos::handlers::delete_contrato),
        )
        .route("/{id}/ingresos", get(contratos::handlers::list_contrato_ingresos))
        .route("/{id}/finalizar", post(contratos::handlers::finalizar_contrato))
        .route("/{id}/cancelar", post(contratos::handlers::cancelar_contrato))
        .route("/{id}/devolver-fianza", post(contratos::handlers::devolver_fianza));

    let ingreso_routes = Router::new()
        .route(
            "/",
            get(ingresos::handlers::list_ingresos).post(ingresos::handlers::create_ingreso),
        )
        .route(
            "/{id}",
            get(ingresos::handlers::get_ingreso)
                .put(ingresos::handlers::update_ingreso)
                .delete(ingresos::handlers::delete_ingreso),
        );

    let gasto_routes = Router::new()
        .route(
            "/",
            get(gastos::handlers::list_gastos).post(gastos::handlers::create_gasto),
        )
        .route(
            "/{id}",
            get(gastos::handlers::get_gasto)
                .put(gastos::handlers::update_gasto)
                .delete(gastos::handlers::delete_gasto),
        );

    let prestamo_routes = Router::new()
        .route(
            "/",
            get(prestamos::handlers::list_prestamos).post(prestamos::handlers::create_prestamo),
        )
        .route(
            "/{id}",
            get(prestamos::handlers::get_prestamo)
                .put(prestamos::handlers::update_prestamo)
                .delete(prestamos::handlers::delete_prestamo),
        )
        .route("/{id}/resumen", get(prestamos::handlers::get_prestamo_resumen));

    let dashboard_routes = Router::new()
        .route("/stats", get(dashboard::handlers::get_stats))
        .route("/ocupacion", get(dashboard::handlers::get_ocupacion))
        .route("/financiero", get(dashboard::handlers::get_financiero))
        .route("/rentabilidad", get(dashboard::handlers::get_rentabilidad))
        .route(
            "/contratos-proximos-vencer",
            get(dashboard::handlers::get_contratos_proximos_vencer),
        );

    // Business data: any authenticated user reads, readonly users cannot write
    let business_routes = Router::new()
        .nest("/clientes", cliente_routes)
        .nest("/direcciones", direccion_routes)
        .nest("/locales", local_routes)
        .nest("/trasteros", trastero_routes)
        .nest("/contratos", contrato_routes)
        .nest("/ingresos", ingreso_routes)
        .nest("/gastos", gasto_routes)
        .nest("/prestamos", prestamo_routes)
        .nest("/dashboard", dashboard_routes)
        .layer(middleware::from_fn(require_write))
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware));

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    let mut router = Router::new()
        // Health
        .route("/health", get(health::handlers::health_check))
        // Auth
        .nest("/api/auth", auth_routes.merge(auth_protected_routes))
        // Users
        .nest("/api/users", user_routes)
        // Business
        .nest("/api", business_routes)
        .with_state(state)
        // Swagger UI
        .merge(swagger_routes);

    if let Some(handle) = metrics_handle {
        let metrics_routes = Router::new()
            .route("/metrics", get(prometheus_metrics))
            .with_state(MetricsState { handle });
        router = router.merge(metrics_routes);
    }

    // Middleware
    router
        .route_layer(middleware::from_fn(http_metrics_middleware))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
}
