//! Shared harness: in-memory SQLite, migrated, with one user per role.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use sea_orm_migration::MigratorTrait;
use serde_json::{json, Value};
use tower::ServiceExt;

use trastero_admin::application::identity::CreateUserCommand;
use trastero_admin::application::{create_event_bus, AuthService};
use trastero_admin::domain::{RepositoryProvider, UserRole};
use trastero_admin::infrastructure::crypto::jwt::JwtConfig;
use trastero_admin::{
    create_api_router, init_database, AppState, DatabaseConfig, Migrator, SeaOrmRepositoryProvider,
};

pub const PASSWORD: &str = "password123";
pub const ADMIN: &str = "admin@test.es";
pub const GESTOR: &str = "gestor@test.es";
pub const LECTOR: &str = "lector@test.es";

const BCRYPT_COST: u32 = 4;

pub struct TestApp {
    pub router: Router,
    pub repos: Arc<dyn RepositoryProvider>,
    pub auth: Arc<AuthService>,
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_refresh_days(30).await
}

/// A negative lifetime issues refresh tokens that are already expired.
pub async fn spawn_app_with_refresh_days(refresh_days: i64) -> TestApp {
    let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
    let jwt_config = JwtConfig {
        secret: "integration-secret".into(),
        expiration_minutes: 15,
        ..JwtConfig::default()
    };
    let auth = Arc::new(AuthService::new(
        repos.clone(),
        jwt_config,
        refresh_days,
        BCRYPT_COST,
    ));
    let state = AppState::new(db, repos.clone(), create_event_bus(), auth.clone(), BCRYPT_COST);

    for (nombre, email, rol) in [
        ("Admin", ADMIN, UserRole::Admin),
        ("Gestor", GESTOR, UserRole::Gestor),
        ("Lector", LECTOR, UserRole::Readonly),
    ] {
        state
            .users
            .create(CreateUserCommand {
                nombre: nombre.into(),
                email: email.into(),
                password: PASSWORD.into(),
                rol,
                activo: true,
            })
            .await
            .unwrap();
    }

    TestApp {
        router: create_api_router(state, None, &[]),
        repos,
        auth,
    }
}

impl TestApp {
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    pub async fn get(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, Some(token), None).await
    }

    pub async fn post(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(token), Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(token), Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, Some(token), None).await
    }

    /// Full token payload (`data` of the login response).
    pub async fn login(&self, email: &str) -> Value {
        let (status, body) = self
            .request(
                Method::POST,
                "/api/auth/login",
                None,
                Some(json!({ "email": email, "password": PASSWORD })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {}", body);
        body["data"].clone()
    }

    pub async fn token(&self, email: &str) -> String {
        self.login(email).await["access_token"]
            .as_str()
            .unwrap()
            .to_string()
    }

    // ── Fixtures ────────────────────────────────────────────────

    pub async fn create_local(&self, token: &str, nombre: &str) -> i64 {
        let (status, body) = self
            .post("/api/locales", token, json!({ "nombre": nombre }))
            .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
        body["data"]["id"].as_i64().unwrap()
    }

    pub async fn create_trastero(&self, token: &str, local_id: i64, numero: &str) -> i64 {
        let (status, body) = self
            .post(
                "/api/trasteros",
                token,
                json!({ "local_id": local_id, "numero": numero, "precio_mensual": 6500 }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
        body["data"]["id"].as_i64().unwrap()
    }

    pub async fn create_cliente(&self, token: &str, dni: &str, email: &str) -> i64 {
        let (status, body) = self
            .post(
                "/api/clientes",
                token,
                json!({
                    "nombre": "Ana",
                    "apellidos": "García López",
                    "dni_nie": dni,
                    "email": email,
                    "rgpd_aceptado": true
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
        body["data"]["id"].as_i64().unwrap()
    }

    pub async fn create_contrato(
        &self,
        token: &str,
        trastero_id: i64,
        cliente_id: i64,
        inicio: &str,
        fin: Option<&str>,
    ) -> (StatusCode, Value) {
        self.post(
            "/api/contratos",
            token,
            json!({
                "trastero_id": trastero_id,
                "cliente_id": cliente_id,
                "fecha_inicio": inicio,
                "fecha_fin": fin,
                "fianza": 6500,
                "dia_pago": 5
            }),
        )
        .await
    }
}
