//! Shared helpers for router-level tests.
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use catalog_backend::auth::{password, Role};
use catalog_backend::config::Settings;
use catalog_backend::router::create_router;
use catalog_backend::store::NewUser;
use catalog_backend::AppState;

pub const ADMIN_USERNAME: &str = "root";
pub const ADMIN_PASSWORD: &str = "AdminPass1";

pub fn test_state() -> AppState {
    let mut settings = Settings::default();
    settings.jwt.secret = "integration-test-secret".to_string();
    AppState::new(settings)
}

pub fn test_app(state: &AppState) -> Router {
    create_router(state.clone())
}

/// Seed an admin account directly through the store, the way a deployment
/// provisions one.
pub async fn seed_admin(state: &AppState) {
    let password_hash = password::hash_password(ADMIN_PASSWORD).unwrap();
    state
        .users
        .insert(NewUser {
            username: ADMIN_USERNAME.to_string(),
            email: "root@x.com".to_string(),
            password_hash,
            enabled: true,
            roles: vec![Role::User, Role::Admin],
        })
        .await
        .unwrap();
}

/// Fire one request at the router and decode the JSON body (Null when empty).
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

pub async fn register(app: &Router, username: &str, password: &str) -> (StatusCode, Value) {
    send_json(
        app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "username": username,
            "password": password,
            "email": format!("{username}@x.com"),
        })),
    )
    .await
}

pub async fn login(app: &Router, username: &str, password: &str) -> (StatusCode, Value) {
    send_json(
        app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": username, "password": password })),
    )
    .await
}

/// Register a user and return their bearer token.
pub async fn user_token(app: &Router, username: &str) -> String {
    let (status, body) = register(app, username, "Secret123").await;
    assert_eq!(status, StatusCode::CREATED);
    body["token"].as_str().unwrap().to_string()
}

/// Log the seeded admin in and return their bearer token.
pub async fn admin_token(app: &Router) -> String {
    let (status, body) = login(app, ADMIN_USERNAME, ADMIN_PASSWORD).await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

pub fn error_code(body: &Value) -> &str {
    body["error"]["code"].as_str().unwrap_or_default()
}
