mod common;

use axum::http::StatusCode;
use chrono::{Datelike, Utc};
use serde_json::json;

use common::{spawn_app, TestApp, GESTOR};

async fn create_prestamo(app: &TestApp, token: &str, local_id: i64) -> i64 {
    let (status, body) = app
        .post(
            "/api/prestamos",
            token,
            json!({
                "local_id": local_id,
                "entidad_bancaria": "Banco Norte",
                "capital_solicitado": 80_000_00,
                "total_a_devolver": 100_000_00,
                "tipo_interes": 350,
                "fecha_concesion": "2024-01-15"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["data"]["id"].as_i64().unwrap()
}

#[tokio::test]
async fn prestamo_total_must_cover_capital() {
    let app = spawn_app().await;
    let token = app.token(GESTOR).await;
    let local = app.create_local(&token, "Centro").await;

    let (status, _) = app
        .post(
            "/api/prestamos",
            &token,
            json!({
                "local_id": local,
                "entidad_bancaria": "Banco Norte",
                "capital_solicitado": 10_000_00,
                "total_a_devolver": 9_000_00,
                "fecha_concesion": "2024-01-15"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn resumen_sums_linked_gastos() {
    let app = spawn_app().await;
    let token = app.token(GESTOR).await;
    let local = app.create_local(&token, "Centro").await;
    let prestamo = create_prestamo(&app, &token, local).await;

    for fecha in ["2024-02-01", "2024-03-01"] {
        let (status, body) = app
            .post(
                "/api/gastos",
                &token,
                json!({
                    "local_id": local,
                    "prestamo_id": prestamo,
                    "concepto": "Cuota",
                    "importe": 12_500_00,
                    "fecha": fecha
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
        assert_eq!(body["data"]["categoria"], "cuota_prestamo");
    }

    let (status, body) = app
        .get(&format!("/api/prestamos/{}/resumen", prestamo), &token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total_pagado"], 25_000_00);
    assert_eq!(body["data"]["importe_pendiente"], 75_000_00);
    assert_eq!(body["data"]["porcentaje_amortizado"], 25.0);
}

#[tokio::test]
async fn gasto_prestamo_must_belong_to_the_local() {
    let app = spawn_app().await;
    let token = app.token(GESTOR).await;
    let norte = app.create_local(&token, "Norte").await;
    let sur = app.create_local(&token, "Sur").await;
    let prestamo = create_prestamo(&app, &token, norte).await;

    let (status, _) = app
        .post(
            "/api/gastos",
            &token,
            json!({
                "local_id": sur,
                "prestamo_id": prestamo,
                "concepto": "Cuota",
                "importe": 100_00,
                "fecha": "2024-02-01"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn ingreso_requires_positive_importe_and_existing_contrato() {
    let app = spawn_app().await;
    let token = app.token(GESTOR).await;

    let (status, _) = app
        .post(
            "/api/ingresos",
            &token,
            json!({
                "contrato_id": 4242,
                "concepto": "Enero",
                "importe": 6500,
                "fecha_pago": "2025-01-05",
                "metodo_pago": "efectivo"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .post(
            "/api/ingresos",
            &token,
            json!({
                "contrato_id": 4242,
                "concepto": "Enero",
                "importe": 0,
                "fecha_pago": "2025-01-05",
                "metodo_pago": "efectivo"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn dashboard_stats_reflect_occupancy() {
    let app = spawn_app().await;
    let token = app.token(GESTOR).await;
    let local = app.create_local(&token, "Centro").await;
    let t1 = app.create_trastero(&token, local, "D-1").await;
    app.create_trastero(&token, local, "D-2").await;
    let cliente = app
        .create_cliente(&token, "12345678Z", "ana@example.com")
        .await;
    app.create_contrato(&token, t1, cliente, "2020-01-01", None)
        .await;

    let (status, body) = app.get("/api/dashboard/stats", &token).await;
    assert_eq!(status, StatusCode::OK);
    let stats = &body["data"];
    assert_eq!(stats["clientes_activos"], 1);
    assert_eq!(stats["locales"], 1);
    assert_eq!(stats["trasteros"]["total"], 2);
    assert_eq!(stats["trasteros"]["ocupados"], 1);
    assert_eq!(stats["contratos_activos"], 1);
    assert_eq!(stats["tasa_ocupacion"], 50.0);

    let (status, body) = app.get("/api/dashboard/ocupacion", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["nombre"], "Centro");
}

async fn create_ingreso(app: &TestApp, token: &str, contrato_id: i64, fecha: &str, importe: i64) {
    let (status, body) = app
        .post(
            "/api/ingresos",
            token,
            json!({
                "contrato_id": contrato_id,
                "concepto": "Mensualidad",
                "importe": importe,
                "fecha_pago": fecha,
                "metodo_pago": "transferencia"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
}

async fn create_gasto(app: &TestApp, token: &str, local_id: i64, fecha: &str, importe: i64) {
    let (status, body) = app
        .post(
            "/api/gastos",
            token,
            json!({
                "local_id": local_id,
                "concepto": "Luz",
                "importe": importe,
                "fecha": fecha,
                "categoria": "suministros"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
}

async fn contrato_en(app: &TestApp, token: &str, local_id: i64, numero: &str, dni: &str) -> i64 {
    let trastero = app.create_trastero(token, local_id, numero).await;
    let cliente = app
        .create_cliente(token, dni, &format!("{}@example.com", numero.to_lowercase()))
        .await;
    let (status, body) = app
        .create_contrato(token, trastero, cliente, "2020-01-01", None)
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["data"]["id"].as_i64().unwrap()
}

#[tokio::test]
async fn financiero_defaults_to_the_current_year_by_month() {
    let app = spawn_app().await;
    let token = app.token(GESTOR).await;
    let local = app.create_local(&token, "Centro").await;
    let contrato = contrato_en(&app, &token, local, "F-1", "12345678Z").await;

    let anio = Utc::now().year();
    create_ingreso(&app, &token, contrato, &format!("{}-01-05", anio), 6500).await;
    create_ingreso(&app, &token, contrato, &format!("{}-03-05", anio), 6500).await;
    create_gasto(&app, &token, local, &format!("{}-03-20", anio), 2000).await;
    // Outside the default window.
    create_ingreso(&app, &token, contrato, &format!("{}-12-05", anio - 1), 9999).await;

    let (status, body) = app.get("/api/dashboard/financiero", &token).await;
    assert_eq!(status, StatusCode::OK);
    let resumen = &body["data"];
    assert_eq!(resumen["desde"], format!("{}-01-01", anio));
    assert_eq!(resumen["hasta"], format!("{}-12-31", anio));
    assert_eq!(resumen["total_ingresos"], 13000);
    assert_eq!(resumen["total_gastos"], 2000);
    assert_eq!(resumen["beneficio"], 11000);

    let meses = resumen["meses"].as_array().unwrap();
    assert_eq!(meses.len(), 12);
    assert_eq!(meses[0]["mes"], format!("{}-01", anio));
    assert_eq!(meses[0]["ingresos"], 6500);
    assert_eq!(meses[1]["ingresos"], 0);
    assert_eq!(meses[2]["ingresos"], 6500);
    assert_eq!(meses[2]["gastos"], 2000);
    assert_eq!(meses[2]["beneficio"], 4500);

    let (status, _) = app
        .get("/api/dashboard/financiero?desde=2024-06-01&hasta=2024-01-01", &token)
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn rentabilidad_attributes_ingresos_through_the_trastero() {
    let app = spawn_app().await;
    let token = app.token(GESTOR).await;
    let norte = app.create_local(&token, "Norte").await;
    let sur = app.create_local(&token, "Sur").await;
    let contrato = contrato_en(&app, &token, norte, "N-1", "12345678Z").await;

    create_ingreso(&app, &token, contrato, "2024-02-05", 8000).await;
    create_gasto(&app, &token, norte, "2024-02-10", 1500).await;
    create_gasto(&app, &token, sur, "2024-02-10", 3000).await;

    let (status, body) = app
        .get(
            "/api/dashboard/rentabilidad?desde=2024-01-01&hasta=2024-12-31",
            &token,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let locales = body["data"].as_array().unwrap();
    let fila = |id: i64| {
        locales
            .iter()
            .find(|l| l["local_id"].as_i64() == Some(id))
            .unwrap()
            .clone()
    };

    let n = fila(norte);
    assert_eq!(n["ingresos"], 8000);
    assert_eq!(n["gastos"], 1500);
    assert_eq!(n["beneficio"], 6500);

    let s = fila(sur);
    assert_eq!(s["ingresos"], 0);
    assert_eq!(s["gastos"], 3000);
    assert_eq!(s["beneficio"], -3000);
}

#[tokio::test]
async fn importe_above_the_cap_is_rejected() {
    let app = spawn_app().await;
    let token = app.token(GESTOR).await;
    let local = app.create_local(&token, "Centro").await;

    for importe in [5_000_000_000_000_000_i64, 100_000_000_001] {
        let (status, _) = app
            .post(
                "/api/gastos",
                &token,
                json!({
                    "local_id": local,
                    "concepto": "Reforma",
                    "importe": importe,
                    "fecha": "2024-02-01"
                }),
            )
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    // The cap itself is accepted and the totals still add up.
    create_gasto(&app, &token, local, "2024-02-01", 100_000_000_000).await;
    create_gasto(&app, &token, local, "2024-02-02", 100_000_000_000).await;

    let (status, body) = app
        .get(
            "/api/dashboard/financiero?desde=2024-01-01&hasta=2024-12-31",
            &token,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total_gastos"], 200_000_000_000_i64);

    let (status, _) = app.get("/api/dashboard/stats", &token).await;
    assert_eq!(status, StatusCode::OK);
}
