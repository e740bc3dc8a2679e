//! Handlers for the `/api/v2/companies` resource.

use axum::extract::State;
use axum::response::Response;

use crate::error::AppResult;
use crate::formatters::{ResponseFormat, COMPANY};
use crate::state::AppState;

/// GET /api/v2/companies -- company names tagged with the API version.
pub async fn get_companies(
    State(state): State<AppState>,
    format: ResponseFormat,
) -> AppResult<Response> {
    let names: Vec<String> = state
        .services
        .company
        .get_all()
        .await?
        .into_iter()
        .map(|c| format!("{} V2", c.name))
        .collect();
    format.respond(COMPANY, &names)
}
