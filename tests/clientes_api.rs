mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{spawn_app, GESTOR};

#[tokio::test]
async fn duplicate_dni_or_email_conflicts() {
    let app = spawn_app().await;
    let token = app.token(GESTOR).await;
    app.create_cliente(&token, "12345678Z", "ana@example.com")
        .await;

    let (status, _) = app
        .post(
            "/api/clientes",
            &token,
            json!({ "nombre": "Otra", "dni_nie": "12345678z" }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app
        .post(
            "/api/clientes",
            &token,
            json!({ "nombre": "Otra", "email": "ANA@example.com" }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn invalid_dni_is_rejected() {
    let app = spawn_app().await;
    let token = app.token(GESTOR).await;

    let (status, body) = app
        .post(
            "/api/clientes",
            &token,
            json!({ "nombre": "Luis", "dni_nie": "12345678A" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn search_filters_by_name() {
    let app = spawn_app().await;
    let token = app.token(GESTOR).await;
    app.create_cliente(&token, "12345678Z", "ana@example.com")
        .await;
    app.post(
        "/api/clientes",
        &token,
        json!({ "nombre": "Pedro", "dni_nie": "87654321X" }),
    )
    .await;

    let (status, body) = app.get("/api/clientes?search=pedro", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["items"][0]["nombre"], "Pedro");
}

#[tokio::test]
async fn delete_without_contracts_removes_the_row() {
    let app = spawn_app().await;
    let token = app.token(GESTOR).await;
    let id = app
        .create_cliente(&token, "00000000T", "b@example.com")
        .await;

    let (status, body) = app.delete(&format!("/api/clientes/{}", id), &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["outcome"], "deleted");

    let (status, _) = app.get(&format!("/api/clientes/{}", id), &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_with_contracts_deactivates() {
    let app = spawn_app().await;
    let token = app.token(GESTOR).await;
    let local = app.create_local(&token, "Sur").await;
    let trastero = app.create_trastero(&token, local, "B-02").await;
    let cliente = app
        .create_cliente(&token, "12345678Z", "ana@example.com")
        .await;
    let (status, _) = app
        .create_contrato(&token, trastero, cliente, "2025-01-01", None)
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app
        .delete(&format!("/api/clientes/{}", cliente), &token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["outcome"], "deactivated");

    let (status, body) = app.get(&format!("/api/clientes/{}", cliente), &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["activo"], false);

    let (_, body) = app
        .get(&format!("/api/clientes/{}/contratos", cliente), &token)
        .await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = spawn_app().await;
    let token = app.token(GESTOR).await;

    let (status, _) = app
        .post("/api/clientes", &token, json!({ "apellidos": "Sin nombre" }))
        .await;
    assert!(status == StatusCode::BAD_REQUEST || status == StatusCode::UNPROCESSABLE_ENTITY);
}
