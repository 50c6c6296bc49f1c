mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{spawn_app, GESTOR};

#[tokio::test]
async fn numero_is_unique_within_a_local() {
    let app = spawn_app().await;
    let token = app.token(GESTOR).await;
    let norte = app.create_local(&token, "Norte").await;
    let sur = app.create_local(&token, "Sur").await;
    app.create_trastero(&token, norte, "A-01").await;

    let (status, _) = app
        .post(
            "/api/trasteros",
            &token,
            json!({ "local_id": norte, "numero": "A-01", "precio_mensual": 5000 }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    app.create_trastero(&token, sur, "A-01").await;

    let (status, _) = app
        .post(
            "/api/trasteros",
            &token,
            json!({ "local_id": 9999, "numero": "Z-1", "precio_mensual": 5000 }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn estado_change_respects_current_contract() {
    let app = spawn_app().await;
    let token = app.token(GESTOR).await;
    let local = app.create_local(&token, "Centro").await;
    let trastero = app.create_trastero(&token, local, "C-10").await;
    let cliente = app
        .create_cliente(&token, "12345678Z", "ana@example.com")
        .await;
    let uri = format!("/api/trasteros/{}/estado", trastero);

    let (status, _) = app
        .request(Method::PATCH, &uri, Some(&token), Some(json!({ "estado": "roto" })))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = app
        .create_contrato(&token, trastero, cliente, "2020-01-01", None)
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = app
        .request(
            Method::PATCH,
            &uri,
            Some(&token),
            Some(json!({ "estado": "disponible" })),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = app
        .request(
            Method::PATCH,
            &uri,
            Some(&token),
            Some(json!({ "estado": "mantenimiento" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["estado"], "mantenimiento");
}

#[tokio::test]
async fn trastero_in_mantenimiento_cannot_be_rented() {
    let app = spawn_app().await;
    let token = app.token(GESTOR).await;
    let local = app.create_local(&token, "Centro").await;
    let trastero = app.create_trastero(&token, local, "M-1").await;
    let cliente = app
        .create_cliente(&token, "12345678Z", "ana@example.com")
        .await;

    app.request(
        Method::PATCH,
        &format!("/api/trasteros/{}/estado", trastero),
        Some(&token),
        Some(json!({ "estado": "mantenimiento" })),
    )
    .await;

    let (status, _) = app
        .create_contrato(&token, trastero, cliente, "2025-01-01", None)
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn disponibles_excludes_booked_units() {
    let app = spawn_app().await;
    let token = app.token(GESTOR).await;
    let local = app.create_local(&token, "Centro").await;
    let libre = app.create_trastero(&token, local, "L-1").await;
    let ocupado = app.create_trastero(&token, local, "L-2").await;
    let cliente = app
        .create_cliente(&token, "12345678Z", "ana@example.com")
        .await;
    app.create_contrato(&token, ocupado, cliente, "2025-01-01", Some("2025-12-31"))
        .await;

    let (status, body) = app
        .get(
            "/api/trasteros/disponibles?fecha_inicio=2025-06-01&fecha_fin=2025-06-30",
            &token,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![libre]);

    let (_, body) = app
        .get("/api/trasteros/disponibles?fecha_inicio=2026-01-01", &token)
        .await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(2));
}
