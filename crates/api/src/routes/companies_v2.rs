//! Route definitions for `/api/v2/companies`.

use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;

use super::companies::COMPANIES_CACHE;
use crate::handlers::companies_v2;
use crate::middleware::cache::cache_headers;
use crate::state::AppState;

/// ```text
/// GET    /                  -> get_companies
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(companies_v2::get_companies)
            .layer(from_fn_with_state(COMPANIES_CACHE, cache_headers)),
    )
}
