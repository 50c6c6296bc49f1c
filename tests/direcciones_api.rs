mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{spawn_app, GESTOR};

fn direccion(cliente_id: Option<i64>, codigo_postal: &str, pais: Option<&str>) -> Value {
    json!({
        "cliente_id": cliente_id,
        "tipo_via": "Calle",
        "nombre_via": "Mayor",
        "numero": "12",
        "codigo_postal": codigo_postal,
        "ciudad": "Madrid",
        "pais": pais
    })
}

#[tokio::test]
async fn direccion_for_unknown_cliente_is_not_found() {
    let app = spawn_app().await;
    let token = app.token(GESTOR).await;

    let (status, _) = app
        .post("/api/direcciones", &token, direccion(Some(4242), "28013", None))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = app
        .post("/api/direcciones", &token, direccion(None, "28013", None))
        .await;
    let id = body["data"]["id"].as_i64().unwrap();
    let (status, _) = app
        .put(
            &format!("/api/direcciones/{}", id),
            &token,
            json!({ "cliente_id": 4242 }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn direccion_belongs_to_its_cliente() {
    let app = spawn_app().await;
    let token = app.token(GESTOR).await;
    let cliente = app
        .create_cliente(&token, "12345678Z", "ana@example.com")
        .await;

    let (status, body) = app
        .post("/api/direcciones", &token, direccion(Some(cliente), " 28013 ", None))
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    assert_eq!(body["data"]["codigo_postal"], "28013");
    assert_eq!(body["data"]["pais"], "España");

    let (status, body) = app
        .get(&format!("/api/direcciones?cliente_id={}", cliente), &token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn spanish_postal_codes_are_checked() {
    let app = spawn_app().await;
    let token = app.token(GESTOR).await;

    // Province prefixes run from 01 to 52.
    for codigo in ["99999", "00123", "2801", "28O13"] {
        let (status, _) = app
            .post("/api/direcciones", &token, direccion(None, codigo, None))
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{}", codigo);
    }

    let (status, body) = app
        .post("/api/direcciones", &token, direccion(None, "52001", Some("España")))
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, _) = app
        .put(
            &format!("/api/direcciones/{}", id),
            &token,
            json!({ "codigo_postal": "53000" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // Other countries keep their own formats.
    let (status, _) = app
        .post(
            "/api/direcciones",
            &token,
            direccion(None, "1000-001", Some("Portugal")),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
}
