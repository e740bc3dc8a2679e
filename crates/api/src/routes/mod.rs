pub mod authentication;
pub mod companies;
pub mod companies_v2;
pub mod employees;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /companies                                       list (Manager), create, options
/// /companies/collection                            create many
/// /companies/collection/({ids})                    get many
/// /companies/{companyId}                           get, update, delete
///
/// /companies/{companyId}/employees                 list (paged), create, options
/// /companies/{companyId}/employees/{id}            get, update, patch, delete
/// ```
pub fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .nest("/companies", companies::router())
        .nest("/companies/{company_id}/employees", employees::router())
}

/// Build the `/api/v2` route tree.
///
/// ```text
/// /companies                                       list of versioned names
/// ```
pub fn api_v2_routes() -> Router<AppState> {
    Router::new().nest("/companies", companies_v2::router())
}
