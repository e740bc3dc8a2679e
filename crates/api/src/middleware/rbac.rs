//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose roles do not
//! meet the requirement.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use corpdir_core::error::CoreError;
use corpdir_core::roles::ROLE_MANAGER;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `Manager` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn managers_only(RequireManager(user): RequireManager) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireManager(pub AuthUser);

impl FromRequestParts<AppState> for RequireManager {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.has_role(ROLE_MANAGER) {
            return Err(AppError::Core(CoreError::Forbidden(
                "Manager role required".into(),
            )));
        }
        Ok(RequireManager(user))
    }
}
