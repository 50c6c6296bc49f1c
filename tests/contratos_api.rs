mod common;

use axum::http::StatusCode;
use chrono::{Duration, NaiveDate, Utc};
use serde_json::{json, Value};

use common::{spawn_app, TestApp, GESTOR};

async fn setup(app: &TestApp, token: &str) -> (i64, i64) {
    let local = app.create_local(token, "Centro").await;
    let trastero = app.create_trastero(token, local, "A-01").await;
    let cliente = app
        .create_cliente(token, "12345678Z", "ana@example.com")
        .await;
    (trastero, cliente)
}

#[tokio::test]
async fn overlapping_contract_is_rejected() {
    let app = spawn_app().await;
    let token = app.token(GESTOR).await;
    let (trastero, cliente) = setup(&app, &token).await;

    let (status, body) = app
        .create_contrato(&token, trastero, cliente, "2025-01-01", Some("2025-06-30"))
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    assert_eq!(body["data"]["estado"], "activo");

    // Sharing the last day is already an overlap.
    let (status, _) = app
        .create_contrato(&token, trastero, cliente, "2025-06-30", Some("2025-12-31"))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // An open-ended contract overlaps everything after its start.
    let (status, _) = app
        .create_contrato(&token, trastero, cliente, "2024-12-01", None)
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn adjacent_contract_is_accepted() {
    let app = spawn_app().await;
    let token = app.token(GESTOR).await;
    let (trastero, cliente) = setup(&app, &token).await;

    let (status, _) = app
        .create_contrato(&token, trastero, cliente, "2025-01-01", Some("2025-06-30"))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app
        .create_contrato(&token, trastero, cliente, "2025-07-01", None)
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);

    let (_, trastero_body) = app
        .get(&format!("/api/trasteros/{}", trastero), &token)
        .await;
    assert_eq!(trastero_body["data"]["estado"], "ocupado");
}

#[tokio::test]
async fn cancelled_contract_frees_the_period() {
    let app = spawn_app().await;
    let token = app.token(GESTOR).await;
    let (trastero, cliente) = setup(&app, &token).await;

    let (_, body) = app
        .create_contrato(&token, trastero, cliente, "2025-01-01", Some("2025-12-31"))
        .await;
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = app
        .post(&format!("/api/contratos/{}/cancelar", id), &token, json!({}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["estado"], "cancelado");

    let (_, trastero_body) = app
        .get(&format!("/api/trasteros/{}", trastero), &token)
        .await;
    assert_eq!(trastero_body["data"]["estado"], "disponible");

    let (status, _) = app
        .create_contrato(&token, trastero, cliente, "2025-03-01", Some("2025-09-30"))
        .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn finalizar_sets_end_date_and_closes() {
    let app = spawn_app().await;
    let token = app.token(GESTOR).await;
    let (trastero, cliente) = setup(&app, &token).await;

    let (_, body) = app
        .create_contrato(&token, trastero, cliente, "2025-01-01", None)
        .await;
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, _) = app
        .post(
            &format!("/api/contratos/{}/finalizar", id),
            &token,
            json!({ "fecha_fin": "2024-12-01" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = app
        .post(
            &format!("/api/contratos/{}/finalizar", id),
            &token,
            json!({ "fecha_fin": "2025-03-31" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["estado"], "finalizado");
    assert_eq!(body["data"]["fecha_fin"], "2025-03-31");

    let (status, _) = app
        .post(&format!("/api/contratos/{}/cancelar", id), &token, json!({}))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app
        .create_contrato(&token, trastero, cliente, "2025-04-01", None)
        .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn fianza_is_returned_once_after_closing() {
    let app = spawn_app().await;
    let token = app.token(GESTOR).await;
    let (trastero, cliente) = setup(&app, &token).await;

    let (_, body) = app
        .create_contrato(&token, trastero, cliente, "2025-01-01", Some("2025-06-30"))
        .await;
    let id = body["data"]["id"].as_i64().unwrap();
    let uri = format!("/api/contratos/{}/devolver-fianza", id);

    let (status, _) = app.post(&uri, &token, json!({})).await;
    assert_eq!(status, StatusCode::CONFLICT);

    app.post(&format!("/api/contratos/{}/finalizar", id), &token, json!({}))
        .await;

    let (status, body) = app.post(&uri, &token, json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["fianza_devuelta"], true);

    let (status, _) = app.post(&uri, &token, json!({})).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn contract_for_inactive_cliente_is_rejected() {
    let app = spawn_app().await;
    let token = app.token(GESTOR).await;
    let (trastero, cliente) = setup(&app, &token).await;

    let (status, _) = app
        .put(
            &format!("/api/clientes/{}", cliente),
            &token,
            json!({ "activo": false }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .create_contrato(&token, trastero, cliente, "2025-01-01", None)
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn invalid_dates_and_dia_pago_are_rejected() {
    let app = spawn_app().await;
    let token = app.token(GESTOR).await;
    let (trastero, cliente) = setup(&app, &token).await;

    let (status, _) = app
        .create_contrato(&token, trastero, cliente, "2025-06-01", Some("2025-05-31"))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = app
        .post(
            "/api/contratos",
            &token,
            json!({
                "trastero_id": trastero,
                "cliente_id": cliente,
                "fecha_inicio": "2025-01-01",
                "dia_pago": 31
            }),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn contract_with_ingresos_cannot_be_deleted() {
    let app = spawn_app().await;
    let token = app.token(GESTOR).await;
    let (trastero, cliente) = setup(&app, &token).await;

    let (_, body) = app
        .create_contrato(&token, trastero, cliente, "2025-01-01", None)
        .await;
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = app
        .post(
            "/api/ingresos",
            &token,
            json!({
                "contrato_id": id,
                "fecha_pago": "2025-01-05",
                "importe": 6500,
                "metodo_pago": "transferencia",
                "concepto": "Enero"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);

    let (status, body) = app
        .get(&format!("/api/contratos/{}/ingresos", id), &token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));

    let (status, _) = app.delete(&format!("/api/contratos/{}", id), &token).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn update_rejects_redating_into_another_contract() {
    let app = spawn_app().await;
    let token = app.token(GESTOR).await;
    let (trastero, cliente) = setup(&app, &token).await;

    let (status, _) = app
        .create_contrato(&token, trastero, cliente, "2025-01-01", Some("2025-03-31"))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let (_, body) = app
        .create_contrato(&token, trastero, cliente, "2025-04-01", Some("2025-06-30"))
        .await;
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, _) = app
        .put(
            &format!("/api/contratos/{}", id),
            &token,
            json!({ "fecha_inicio": "2025-03-15" }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, body) = app.get(&format!("/api/contratos/{}", id), &token).await;
    assert_eq!(body["data"]["fecha_inicio"], "2025-04-01");
}

#[tokio::test]
async fn update_ignores_the_contract_being_redated() {
    let app = spawn_app().await;
    let token = app.token(GESTOR).await;
    let (trastero, cliente) = setup(&app, &token).await;

    let (_, body) = app
        .create_contrato(&token, trastero, cliente, "2025-01-01", Some("2025-06-30"))
        .await;
    let id = body["data"]["id"].as_i64().unwrap();

    // The new period overlaps only the contract's own old period.
    let (status, body) = app
        .put(
            &format!("/api/contratos/{}", id),
            &token,
            json!({ "fecha_inicio": "2025-02-01", "fecha_fin": "2025-08-31" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["data"]["fecha_inicio"], "2025-02-01");
    assert_eq!(body["data"]["fecha_fin"], "2025-08-31");
}

fn ids(body: &Value) -> Vec<i64> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn proximos_vencer_window_is_inclusive() {
    let app = spawn_app().await;
    let token = app.token(GESTOR).await;
    let local = app.create_local(&token, "Centro").await;
    let cliente = app
        .create_cliente(&token, "12345678Z", "ana@example.com")
        .await;

    let hoy = Utc::now().date_naive();
    let fin = |dias: i64| (hoy + Duration::days(dias)).to_string();
    let inicio = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().to_string();

    let mut contratos = Vec::new();
    for (numero, fecha_fin) in [
        ("V-0", Some(fin(0))),
        ("V-10", Some(fin(10))),
        ("V-11", Some(fin(11))),
        ("V-X", None),
    ] {
        let trastero = app.create_trastero(&token, local, numero).await;
        let (status, body) = app
            .create_contrato(&token, trastero, cliente, &inicio, fecha_fin.as_deref())
            .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
        contratos.push(body["data"]["id"].as_i64().unwrap());
    }

    let (status, body) = app
        .get("/api/contratos/proximos-vencer?dias=10", &token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![contratos[0], contratos[1]]);

    let (status, body) = app
        .get("/api/dashboard/contratos-proximos-vencer?dias=10", &token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![contratos[0], contratos[1]]);

    let (_, body) = app
        .get("/api/contratos/proximos-vencer?dias=0", &token)
        .await;
    assert_eq!(ids(&body), vec![contratos[0]]);
}

#[tokio::test]
async fn proximos_vencer_rejects_out_of_range_dias() {
    let app = spawn_app().await;
    let token = app.token(GESTOR).await;

    for uri in [
        "/api/contratos/proximos-vencer",
        "/api/dashboard/contratos-proximos-vencer",
    ] {
        for dias in ["100000000", "366", "-1"] {
            let (status, _) = app.get(&format!("{}?dias={}", uri, dias), &token).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{} dias={}", uri, dias);
        }
        let (status, _) = app.get(&format!("{}?dias=365", uri), &token).await;
        assert_eq!(status, StatusCode::OK);
    }
}
