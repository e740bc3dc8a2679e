//! Handlers for the `/api/v1/companies/{companyId}/employees` resource.

use axum::extract::State;
use axum::http::header::ALLOW;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use corpdir_core::dto::{EmployeeForCreationDto, EmployeeForUpdateDto};
use corpdir_core::parameters::EmployeeParameters;
use corpdir_core::shaping::shape;
use corpdir_core::types::EntityId;
use corpdir_core::validation::validate_dto;

use crate::error::{AppError, AppResult};
use crate::extract::{AppPath, AppQuery, PatchDocument, ValidatedJson};
use crate::formatters::{FormatError, ResponseFormat, EMPLOYEE};
use crate::state::AppState;

const X_PAGINATION: HeaderName = HeaderName::from_static("x-pagination");

/// GET /api/v1/companies/{companyId}/employees
///
/// Paged, filtered and sorted per the query string; `fields` trims each item.
/// Paging metadata is returned in the `X-Pagination` header.
pub async fn get_employees(
    State(state): State<AppState>,
    AppPath(company_id): AppPath<EntityId>,
    AppQuery(params): AppQuery<EmployeeParameters>,
    format: ResponseFormat,
) -> AppResult<Response> {
    let page = state
        .services
        .employee
        .get_employees(company_id, &params)
        .await?;

    let items = serde_json::to_value(&page.items).map_err(FormatError::from)?;
    let mut response = format.respond_value(EMPLOYEE, shape(items, params.fields.as_deref()))?;

    let meta = serde_json::to_string(&page.meta).map_err(FormatError::from)?;
    let meta = HeaderValue::from_str(&meta)
        .map_err(|e| AppError::InternalError(format!("Invalid pagination header: {e}")))?;
    response.headers_mut().insert(X_PAGINATION, meta);
    Ok(response)
}

/// GET /api/v1/companies/{companyId}/employees/{id}
pub async fn get_employee(
    State(state): State<AppState>,
    AppPath((company_id, id)): AppPath<(EntityId, EntityId)>,
    format: ResponseFormat,
) -> AppResult<Response> {
    let employee = state.services.employee.get_employee(company_id, id).await?;
    format.respond(EMPLOYEE, &employee)
}

/// POST /api/v1/companies/{companyId}/employees
pub async fn create_employee(
    State(state): State<AppState>,
    AppPath(company_id): AppPath<EntityId>,
    format: ResponseFormat,
    ValidatedJson(input): ValidatedJson<EmployeeForCreationDto>,
) -> AppResult<Response> {
    let employee = state
        .services
        .employee
        .create_for_company(company_id, &input)
        .await?;
    let location = format!("/api/v1/companies/{company_id}/employees/{}", employee.id);
    format.created(&location, EMPLOYEE, &employee)
}

/// PUT /api/v1/companies/{companyId}/employees/{id}
pub async fn update_employee(
    State(state): State<AppState>,
    AppPath((company_id, id)): AppPath<(EntityId, EntityId)>,
    ValidatedJson(input): ValidatedJson<EmployeeForUpdateDto>,
) -> AppResult<StatusCode> {
    state
        .services
        .employee
        .update_for_company(company_id, id, &input)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/v1/companies/{companyId}/employees/{id}
///
/// Applies a JSON Patch document to the employee's update shape; the result
/// must still pass validation before it is saved.
pub async fn partially_update_employee(
    State(state): State<AppState>,
    AppPath((company_id, id)): AppPath<(EntityId, EntityId)>,
    patch: PatchDocument,
) -> AppResult<StatusCode> {
    let service = &state.services.employee;
    let (current, employee) = service.load_for_patch(company_id, id).await?;

    let patched = patch.apply_to(&current)?;
    validate_dto(&patched)?;

    service.apply_patch(&patched, employee).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/companies/{companyId}/employees/{id}
pub async fn delete_employee(
    State(state): State<AppState>,
    AppPath((company_id, id)): AppPath<(EntityId, EntityId)>,
) -> AppResult<StatusCode> {
    state
        .services
        .employee
        .delete_for_company(company_id, id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// OPTIONS /api/v1/companies/{companyId}/employees
pub async fn get_employees_options() -> impl IntoResponse {
    (StatusCode::OK, [(ALLOW, "GET, OPTIONS, POST, PUT, PATCH, DELETE")])
}
