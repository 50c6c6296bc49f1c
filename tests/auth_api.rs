mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{spawn_app, spawn_app_with_refresh_days, ADMIN, GESTOR, LECTOR, PASSWORD};

#[tokio::test]
async fn login_rejects_wrong_password() {
    let app = spawn_app().await;
    let (status, body) = app
        .request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": ADMIN, "password": "wrong-password" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn login_email_is_case_insensitive() {
    let app = spawn_app().await;
    let tokens = app.login("GESTOR@Test.es").await;
    assert_eq!(tokens["token_type"], "Bearer");
    assert_eq!(tokens["user"]["rol"], "gestor");
}

#[tokio::test]
async fn protected_routes_require_a_valid_token() {
    let app = spawn_app().await;

    let (status, _) = app
        .request(Method::GET, "/api/clientes", None, None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app.get("/api/clientes", "not-a-jwt").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = app.token(LECTOR).await;
    let (status, body) = app.get("/api/auth/me", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["email"], LECTOR);
}

#[tokio::test]
async fn refresh_token_is_single_use() {
    let app = spawn_app().await;
    let tokens = app.login(GESTOR).await;
    let refresh = tokens["refresh_token"].as_str().unwrap();

    let (status, body) = app
        .request(
            Method::POST,
            "/api/auth/refresh",
            None,
            Some(json!({ "refresh_token": refresh })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_ne!(body["data"]["refresh_token"].as_str().unwrap(), refresh);

    let (status, _) = app
        .request(
            Method::POST,
            "/api/auth/refresh",
            None,
            Some(json!({ "refresh_token": refresh })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn expired_refresh_token_is_rejected() {
    let app = spawn_app_with_refresh_days(-1).await;
    let tokens = app.login(GESTOR).await;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/auth/refresh",
            None,
            Some(json!({ "refresh_token": tokens["refresh_token"] })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Refresh token expired");
}

#[tokio::test]
async fn logout_revokes_the_refresh_token() {
    let app = spawn_app().await;
    let tokens = app.login(ADMIN).await;
    let body = json!({ "refresh_token": tokens["refresh_token"] });

    let (status, _) = app
        .request(Method::POST, "/api/auth/logout", None, Some(body.clone()))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .request(Method::POST, "/api/auth/refresh", None, Some(body))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn change_password_requires_current_one() {
    let app = spawn_app().await;
    let token = app.token(GESTOR).await;

    let (status, _) = app
        .put(
            "/api/auth/change-password",
            &token,
            json!({ "current_password": "nope-nope", "new_password": "newpassword1" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .put(
            "/api/auth/change-password",
            &token,
            json!({ "current_password": PASSWORD, "new_password": "newpassword1" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": GESTOR, "password": "newpassword1" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn readonly_users_cannot_write() {
    let app = spawn_app().await;
    let token = app.token(LECTOR).await;

    let (status, _) = app.get("/api/locales", &token).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .post("/api/locales", &token, json!({ "nombre": "Norte" }))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn user_management_is_admin_only() {
    let app = spawn_app().await;

    let gestor = app.token(GESTOR).await;
    let (status, _) = app.get("/api/users", &gestor).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let admin = app.token(ADMIN).await;
    let (status, body) = app.get("/api/users", &admin).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 3);

    let (status, _) = app
        .post(
            "/api/users",
            &admin,
            json!({ "nombre": "Otro", "email": GESTOR, "password": "password123" }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn admin_cannot_delete_own_account() {
    let app = spawn_app().await;
    let tokens = app.login(ADMIN).await;
    let token = tokens["access_token"].as_str().unwrap();
    let id = tokens["user"]["id"].as_str().unwrap();

    let (status, _) = app.delete(&format!("/api/users/{}", id), token).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn deactivated_user_cannot_log_in_or_refresh() {
    let app = spawn_app().await;
    let admin = app.token(ADMIN).await;
    let gestor = app.login(GESTOR).await;
    let id = gestor["user"]["id"].as_str().unwrap();

    let (status, body) = app
        .put(&format!("/api/users/{}", id), &admin, json!({ "activo": false }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["activo"], false);

    let (status, _) = app
        .request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": GESTOR, "password": PASSWORD })),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Deactivation revokes outstanding refresh tokens.
    let (status, _) = app
        .request(
            Method::POST,
            "/api/auth/refresh",
            None,
            Some(json!({ "refresh_token": gestor["refresh_token"] })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn purge_removes_only_expired_refresh_tokens() {
    let expired = spawn_app_with_refresh_days(-1).await;
    expired.login(GESTOR).await;
    expired.login(LECTOR).await;

    assert_eq!(expired.auth.purge_expired_refresh_tokens().await.unwrap(), 2);
    assert_eq!(expired.auth.purge_expired_refresh_tokens().await.unwrap(), 0);

    let live = spawn_app().await;
    let tokens = live.login(GESTOR).await;
    assert_eq!(live.auth.purge_expired_refresh_tokens().await.unwrap(), 0);

    let (status, _) = live
        .request(
            Method::POST,
            "/api/auth/refresh",
            None,
            Some(json!({ "refresh_token": tokens["refresh_token"] })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn deactivation_applies_to_outstanding_access_tokens() {
    let app = spawn_app().await;
    let admin = app.token(ADMIN).await;
    let gestor = app.login(GESTOR).await;
    let access = gestor["access_token"].as_str().unwrap();
    let id = gestor["user"]["id"].as_str().unwrap();

    let (status, _) = app.get("/api/locales", access).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .put(&format!("/api/users/{}", id), &admin, json!({ "activo": false }))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.get("/api/locales", access).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Account is disabled");
}

#[tokio::test]
async fn role_change_applies_to_outstanding_access_tokens() {
    let app = spawn_app().await;
    let admin = app.token(ADMIN).await;
    let gestor = app.login(GESTOR).await;
    let access = gestor["access_token"].as_str().unwrap();
    let id = gestor["user"]["id"].as_str().unwrap();

    let (status, _) = app
        .put(&format!("/api/users/{}", id), &admin, json!({ "rol": "readonly" }))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.get("/api/locales", access).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app
        .post("/api/locales", access, json!({ "nombre": "Norte" }))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
