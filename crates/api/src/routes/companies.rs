//! Route definitions for `/api/v1/companies`.

use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers::companies;
use crate::middleware::cache::{cache_headers, CachePolicy};
use crate::state::AppState;

/// Default expiration for company reads.
pub const COMPANIES_CACHE: CachePolicy = CachePolicy::public(120);
/// Single companies change more often than the list is browsed.
pub const COMPANY_CACHE: CachePolicy = CachePolicy::public(60);

/// Company routes mounted at `/api/v1/companies`.
///
/// ```text
/// GET     /                      -> get_companies (Manager role)
/// POST    /                      -> create_company
/// OPTIONS /                      -> get_companies_options
/// GET     /collection/({ids})    -> get_company_collection
/// POST    /collection            -> create_company_collection
/// GET     /{company_id}          -> get_company
/// PUT     /{company_id}          -> update_company
/// DELETE  /{company_id}          -> delete_company
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(companies::get_companies)
                .layer(from_fn_with_state(COMPANIES_CACHE, cache_headers))
                .post(companies::create_company)
                .options(companies::get_companies_options),
        )
        .route(
            "/collection",
            post(companies::create_company_collection),
        )
        .route(
            "/collection/{ids}",
            get(companies::get_company_collection)
                .layer(from_fn_with_state(COMPANIES_CACHE, cache_headers)),
        )
        .route(
            "/{company_id}",
            get(companies::get_company)
                .layer(from_fn_with_state(COMPANY_CACHE, cache_headers))
                .put(companies::update_company)
                .delete(companies::delete_company),
        )
}
