//! Handlers for registration, login and token refresh.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use corpdir_core::dto::{TokenDto, UserForAuthenticationDto, UserForRegistrationDto};

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// POST /api/authentication
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<UserForRegistrationDto>,
) -> AppResult<StatusCode> {
    state.services.authentication.register_user(&input).await?;
    Ok(StatusCode::CREATED)
}

/// POST /api/authentication/login
pub async fn authenticate(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<UserForAuthenticationDto>,
) -> AppResult<Json<TokenDto>> {
    let auth = &state.services.authentication;
    let user = auth.validate_user(&input).await?;
    let tokens = auth.create_token(&user, true).await?;
    tracing::info!(user_id = %user.id, "User logged in");
    Ok(Json(tokens))
}

/// POST /api/token/refresh
pub async fn refresh(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<TokenDto>,
) -> AppResult<Json<TokenDto>> {
    let tokens = state.services.authentication.refresh_token(&input).await?;
    Ok(Json(tokens))
}
