//! Shared helpers for the API integration tests.
//!
//! Every test gets its own migrated SQLite database in a temp directory and
//! drives the production router (same middleware stack as `main.rs`) through
//! `tower::ServiceExt::oneshot`.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::num::NonZeroU32;

use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use corpdir_api::auth::jwt::{generate_access_token, JwtConfig};
use corpdir_api::config::{RateLimitConfig, ServerConfig};
use corpdir_api::router::build_app_router;
use corpdir_api::state::AppState;
use corpdir_db::DbPool;

/// A running test application: router, pool and the directory that holds
/// its database (deleted on drop).
pub struct TestApp {
    pub router: Router,
    pub pool: DbPool,
    _dir: TempDir,
}

/// Build a test `ServerConfig` with safe defaults and a quota generous enough
/// that ordinary tests never hit it.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: String::new(),
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        rate_limit: RateLimitConfig {
            per_minute: NonZeroU32::new(10_000).unwrap(),
            burst: NonZeroU32::new(10_000).unwrap(),
            trusted_proxies: vec!["127.0.0.1".parse().unwrap()],
        },
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough".to_string(),
            issuer: "CompanyEmployeesAPI".to_string(),
            audience: "https://localhost:5000".to_string(),
            access_token_expiry_mins: 5,
            refresh_token_expiry_days: 7,
        },
    }
}

pub async fn build_test_app() -> TestApp {
    build_test_app_with(test_config()).await
}

/// Build the full application against a fresh database using `config`.
pub async fn build_test_app_with(mut config: ServerConfig) -> TestApp {
    let dir = tempfile::tempdir().expect("temp dir");
    config.database_url = format!("sqlite://{}", dir.path().join("api.db").display());

    let pool = corpdir_db::create_pool(&config.database_url)
        .await
        .expect("pool");
    corpdir_db::run_migrations(&pool).await.expect("migrations");

    let state = AppState::new(pool.clone(), config.clone());
    TestApp {
        router: build_app_router(state, &config),
        pool,
        _dir: dir,
    }
}

/// A signed access token carrying `roles`, without a backing user row.
pub fn token_with_roles(roles: &[&str]) -> String {
    let roles: Vec<String> = roles.iter().map(|r| r.to_string()).collect();
    generate_access_token(uuid::Uuid::new_v4(), "tester", &roles, &test_config().jwt)
        .expect("token generation should succeed")
}

pub fn manager_token() -> String {
    token_with_roles(&["Manager"])
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: &TestApp, request: Request<Body>) -> Response {
    app.router.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &TestApp, uri: &str) -> Response {
    get_with(app, uri, &[]).await
}

/// GET with extra request headers.
pub async fn get_with(app: &TestApp, uri: &str, headers: &[(&str, &str)]) -> Response {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

/// GET as if the connection came from `peer`, with extra request headers.
pub async fn get_from(
    app: &TestApp,
    uri: &str,
    peer: &str,
    headers: &[(&str, &str)],
) -> Response {
    let peer: SocketAddr = peer.parse().unwrap();
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let mut request = builder.body(Body::empty()).unwrap();
    request.extensions_mut().insert(ConnectInfo(peer));
    send(app, request).await
}

pub async fn get_auth(app: &TestApp, uri: &str, token: &str) -> Response {
    let bearer = format!("Bearer {token}");
    get_with(app, uri, &[(AUTHORIZATION.as_str(), bearer.as_str())]).await
}

pub async fn get_as(app: &TestApp, uri: &str, accept: &str) -> Response {
    get_with(app, uri, &[(ACCEPT.as_str(), accept)]).await
}

async fn send_json(app: &TestApp, method: Method, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &TestApp, uri: &str, body: Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: &TestApp, uri: &str, body: Value) -> Response {
    send_json(app, Method::PUT, uri, body).await
}

pub async fn patch_json(app: &TestApp, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(Method::PATCH)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json-patch+json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    send(app, request).await
}

/// POST a raw (possibly malformed) body.
pub async fn post_raw(app: &TestApp, uri: &str, body: &'static str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: &TestApp, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn options(app: &TestApp, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).expect("response body should be JSON")
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).expect("response body should be UTF-8")
}

pub fn header<'a>(response: &'a Response, name: &str) -> Option<&'a str> {
    response.headers().get(name).and_then(|v| v.to_str().ok())
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn company_body(name: &str) -> Value {
    json!({ "name": name, "address": "1 Main Rd", "country": "US" })
}

/// Create a company through the API and return its JSON representation.
pub async fn create_company(app: &TestApp, name: &str) -> Value {
    let response = post_json(app, "/api/v1/companies", company_body(name)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

/// Create an employee through the API and return its JSON representation.
pub async fn create_employee(
    app: &TestApp,
    company_id: &str,
    name: &str,
    age: i32,
    position: &str,
) -> Value {
    let uri = format!("/api/v1/companies/{company_id}/employees");
    let body = json!({ "name": name, "age": age, "position": position });
    let response = post_json(app, &uri, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}
