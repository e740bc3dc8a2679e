//! Handlers for the `/api/v1/companies` resource.

use axum::extract::State;
use axum::http::header::ALLOW;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use corpdir_core::dto::{CompanyCollectionForCreationDto, CompanyForCreationDto, CompanyForUpdateDto};
use corpdir_core::types::EntityId;

use crate::error::AppResult;
use crate::extract::{AppPath, CompanyIds, ValidatedJson};
use crate::formatters::{ResponseFormat, COMPANY};
use crate::middleware::rbac::RequireManager;
use crate::state::AppState;

const BASE_PATH: &str = "/api/v1/companies";

/// GET /api/v1/companies
pub async fn get_companies(
    RequireManager(user): RequireManager,
    State(state): State<AppState>,
    format: ResponseFormat,
) -> AppResult<Response> {
    tracing::debug!(user = %user.user_name, "Listing companies");
    let companies = state.services.company.get_all().await?;
    format.respond(COMPANY, &companies)
}

/// GET /api/v1/companies/{id}
pub async fn get_company(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
    format: ResponseFormat,
) -> AppResult<Response> {
    let company = state.services.company.get(id).await?;
    format.respond(COMPANY, &company)
}

/// POST /api/v1/companies
pub async fn create_company(
    State(state): State<AppState>,
    format: ResponseFormat,
    ValidatedJson(input): ValidatedJson<CompanyForCreationDto>,
) -> AppResult<Response> {
    let company = state.services.company.create(&input).await?;
    format.created(&format!("{BASE_PATH}/{}", company.id), COMPANY, &company)
}

/// GET /api/v1/companies/collection/({ids})
pub async fn get_company_collection(
    State(state): State<AppState>,
    CompanyIds(ids): CompanyIds,
    format: ResponseFormat,
) -> AppResult<Response> {
    let companies = state.services.company.get_by_ids(&ids).await?;
    format.respond(COMPANY, &companies)
}

/// POST /api/v1/companies/collection
pub async fn create_company_collection(
    State(state): State<AppState>,
    format: ResponseFormat,
    ValidatedJson(input): ValidatedJson<CompanyCollectionForCreationDto>,
) -> AppResult<Response> {
    let (companies, ids) = state
        .services
        .company
        .create_collection(&input.companies)
        .await?;
    format.created(&format!("{BASE_PATH}/collection/({ids})"), COMPANY, &companies)
}

/// PUT /api/v1/companies/{id}
pub async fn update_company(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
    ValidatedJson(input): ValidatedJson<CompanyForUpdateDto>,
) -> AppResult<StatusCode> {
    state.services.company.update(id, &input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/companies/{id}
pub async fn delete_company(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntityId>,
) -> AppResult<StatusCode> {
    state.services.company.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// OPTIONS /api/v1/companies
pub async fn get_companies_options() -> impl IntoResponse {
    (StatusCode::OK, [(ALLOW, "GET, OPTIONS, POST, PUT, DELETE")])
}
