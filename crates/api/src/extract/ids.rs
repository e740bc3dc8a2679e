use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use corpdir_core::error::CoreError;
use corpdir_core::types::EntityId;

use crate::error::AppError;

/// Company ids taken from a `(id1,id2,...)` path segment.
#[derive(Debug, Clone)]
pub struct CompanyIds(pub Vec<EntityId>);

impl<S: Send + Sync> FromRequestParts<S> for CompanyIds {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;
        Ok(CompanyIds(parse_ids(&raw)?))
    }
}

/// Parse a comma-separated id list, with or without surrounding parentheses.
pub fn parse_ids(raw: &str) -> Result<Vec<EntityId>, CoreError> {
    let inner = raw.trim();
    let inner = inner.strip_prefix('(').unwrap_or(inner);
    let inner = inner.strip_suffix(')').unwrap_or(inner);

    let ids = inner
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<EntityId>()
                .map_err(|_| CoreError::BadRequest(format!("Invalid id in collection: {s}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if ids.is_empty() {
        return Err(CoreError::BadRequest("Parameter ids is null".into()));
    }
    Ok(ids)
}
