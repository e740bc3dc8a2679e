//! HTTP-level integration tests for the company endpoints (v1 and v2).

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, company_body, create_company, delete, get, get_auth, header,
    manager_token, options, post_json, put_json, token_with_roles,
};
use serde_json::json;

// ---------------------------------------------------------------------------
// Listing and authorization
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_requires_a_token() {
    let app = build_test_app().await;
    let response = get(&app, "/api/v1/companies").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn list_requires_manager_role() {
    let app = build_test_app().await;
    let token = token_with_roles(&["Administrator"]);
    let response = get_auth(&app, "/api/v1/companies", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn list_rejects_garbage_token() {
    let app = build_test_app().await;
    let response = get_auth(&app, "/api/v1/companies", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn manager_lists_companies_ordered_by_name() {
    let app = build_test_app().await;
    create_company(&app, "Zeta").await;
    create_company(&app, "Alpha").await;

    let response = get_auth(&app, "/api/v1/companies", &manager_token()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Alpha", "Zeta"]);
}

// ---------------------------------------------------------------------------
// Single company
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_returns_location_that_resolves() {
    let app = build_test_app().await;

    let response = post_json(
        &app,
        "/api/v1/companies",
        json!({ "name": "Acme", "address": "1 Rd", "country": "US" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let location = header(&response, "location").unwrap().to_string();
    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap();
    assert_eq!(location, format!("/api/v1/companies/{id}"));
    assert_eq!(created["name"], "Acme");
    assert_eq!(created["address"], "1 Rd");
    assert_eq!(created["country"], "US");

    let fetched = body_json(get(&app, &location).await).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_with_nested_employees() {
    let app = build_test_app().await;
    let mut body = company_body("Acme");
    body["employees"] = json!([
        { "name": "Ann", "age": 30, "position": "Dev" },
        { "name": "Bob", "age": 40, "position": "Ops" }
    ]);

    let response = post_json(&app, "/api/v1/companies", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_str().unwrap().to_string();

    let employees = body_json(get(&app, &format!("/api/v1/companies/{id}/employees")).await).await;
    assert_eq!(employees.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unknown_company_is_404() {
    let app = build_test_app().await;
    let id = uuid::Uuid::new_v4();

    let response = get(&app, &format!("/api/v1/companies/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], format!("Company with id {id} not found"));
}

#[tokio::test]
async fn update_replaces_fields() {
    let app = build_test_app().await;
    let id = create_company(&app, "Before").await["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = put_json(
        &app,
        &format!("/api/v1/companies/{id}"),
        json!({ "name": "After", "address": "2 Rd", "country": "UK" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let json = body_json(get(&app, &format!("/api/v1/companies/{id}")).await).await;
    assert_eq!(json["name"], "After");
    assert_eq!(json["country"], "UK");
}

#[tokio::test]
async fn update_unknown_company_is_404() {
    let app = build_test_app().await;
    let response = put_json(
        &app,
        &format!("/api/v1/companies/{}", uuid::Uuid::new_v4()),
        company_body("Ghost"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_then_gone() {
    let app = build_test_app().await;
    let id = create_company(&app, "Doomed").await["id"]
        .as_str()
        .unwrap()
        .to_string();
    let uri = format!("/api/v1/companies/{id}");

    assert_eq!(delete(&app, &uri).await.status(), StatusCode::NO_CONTENT);
    assert_eq!(get(&app, &uri).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(delete(&app, &uri).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn options_lists_allowed_methods() {
    let app = build_test_app().await;
    let response = options(&app, "/api/v1/companies").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        header(&response, "allow"),
        Some("GET, OPTIONS, POST, PUT, DELETE")
    );
}

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

#[tokio::test]
async fn collection_round_trip() {
    let app = build_test_app().await;
    let response = post_json(
        &app,
        "/api/v1/companies/collection",
        json!([company_body("One"), company_body("Two")]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let location = header(&response, "location").unwrap().to_string();
    assert!(location.starts_with("/api/v1/companies/collection/("));
    let created = body_json(response).await;
    assert_eq!(created.as_array().unwrap().len(), 2);

    let fetched = body_json(get(&app, &location).await).await;
    let names: Vec<&str> = fetched
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["One", "Two"]);
}

#[tokio::test]
async fn collection_with_missing_id_is_400() {
    let app = build_test_app().await;
    let id = create_company(&app, "Real").await["id"]
        .as_str()
        .unwrap()
        .to_string();
    let missing = uuid::Uuid::new_v4();

    let response = get(&app, &format!("/api/v1/companies/collection/({id},{missing})")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Collection count mismatch comparing to ids."
    );
}

#[tokio::test]
async fn collection_with_malformed_ids_is_400() {
    let app = build_test_app().await;
    let response = get(&app, "/api/v1/companies/collection/(nope)").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(&app, "/api/v1/companies/collection/()").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Parameter ids is null");
}

#[tokio::test]
async fn empty_collection_is_400() {
    let app = build_test_app().await;
    let response = post_json(&app, "/api/v1/companies/collection", json!([])).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Company collection sent from a client is null."
    );
}

#[tokio::test]
async fn invalid_collection_item_persists_nothing() {
    let app = build_test_app().await;
    let response = post_json(
        &app,
        "/api/v1/companies/collection",
        json!([company_body("Fine"), { "name": "", "address": "1 Rd" }]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["violations"][0]["field"], "companies[1].name");

    let list = body_json(get_auth(&app, "/api/v1/companies", &manager_token()).await).await;
    assert!(list.as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Version 2
// ---------------------------------------------------------------------------

#[tokio::test]
async fn v2_lists_versioned_names() {
    let app = build_test_app().await;
    create_company(&app, "Acme").await;

    let response = get(&app, "/api/v2/companies").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!(["Acme V2"]));
}
