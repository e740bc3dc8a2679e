//! Tests for `AppError` -> HTTP response mapping and request-body rejection.
//!
//! The first group calls `IntoResponse` directly on `AppError` values; the
//! second drives malformed bodies through the router.

mod common;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::{body_json, build_test_app, create_company, get, header, post_raw};
use corpdir_api::error::AppError;
use corpdir_core::error::{CoreError, FieldViolation};
use http_body_util::BodyExt;
use uuid::Uuid;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let id = Uuid::nil();
    let (status, json) = error_to_response(CoreError::company_not_found(id).into()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], format!("Company with id {id} not found"));
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let (status, json) = error_to_response(AppError::bad_request("Parameter ids is null")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "Parameter ids is null");
}

#[tokio::test]
async fn validation_error_returns_422_with_violations() {
    let err = AppError::Core(CoreError::Validation(vec![FieldViolation {
        field: "name".into(),
        code: "length".into(),
        message: "Company name is a required field".into(),
    }]));
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["violations"][0]["field"], "name");
    assert_eq!(json["violations"][0]["code"], "length");
}

#[tokio::test]
async fn auth_errors_map_to_401_and_403() {
    let (status, json) =
        error_to_response(CoreError::Unauthorized("Missing token".into()).into()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");

    let (status, json) = error_to_response(CoreError::Forbidden("No".into()).into()).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "FORBIDDEN");
}

#[tokio::test]
async fn conflict_error_returns_409() {
    let (status, json) =
        error_to_response(CoreError::Conflict("duplicate name".into()).into()).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"], "duplicate name");
}

#[tokio::test]
async fn internal_errors_are_sanitized() {
    let (status, json) =
        error_to_response(AppError::InternalError("secret detail".into())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");

    let (status, _) = error_to_response(CoreError::Internal("boom".into()).into()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn row_not_found_maps_to_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn not_acceptable_returns_406() {
    let (status, json) = error_to_response(AppError::NotAcceptable("image/png".into())).await;
    assert_eq!(status, StatusCode::NOT_ACCEPTABLE);
    assert_eq!(json["code"], "NOT_ACCEPTABLE");
}

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

#[tokio::test]
async fn null_body_names_the_expected_type() {
    let app = build_test_app().await;
    let response = post_raw(&app, "/api/v1/companies", "null").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "CompanyForCreationDto object is null"
    );
}

#[tokio::test]
async fn empty_body_is_400() {
    let app = build_test_app().await;
    let response = post_raw(&app, "/api/v1/companies", "").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_json_is_400() {
    let app = build_test_app().await;
    let response = post_raw(&app, "/api/v1/companies", "{\"name\": ").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn every_violation_is_reported_at_once() {
    let app = build_test_app().await;
    let response = post_raw(
        &app,
        "/api/v1/companies",
        r#"{"name": "", "address": "", "employees": [{"name": "Kid", "age": 12, "position": "Intern"}]}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    let fields: Vec<&str> = json["violations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["address", "employees[0].age", "name"]);
}

#[tokio::test]
async fn malformed_path_id_is_json_404() {
    let app = build_test_app().await;

    let response = get(&app, "/api/v1/companies/not-a-uuid").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(header(&response, "content-type"), Some("application/json"));
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert!(json["error"].as_str().unwrap().contains("company_id"));

    let cid = create_company(&app, "Acme").await["id"].as_str().unwrap().to_string();
    let response = get(&app, &format!("/api/v1/companies/{cid}/employees/42")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn malformed_query_string_is_json_400() {
    let app = build_test_app().await;
    let cid = create_company(&app, "Acme").await["id"].as_str().unwrap().to_string();

    let response = get(&app, &format!("/api/v1/companies/{cid}/employees?pageNumber=-1")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(header(&response, "content-type"), Some("application/json"));
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().unwrap().starts_with("Failed to deserialize query string"));
}
