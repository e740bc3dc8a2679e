//! Route definitions for registration, login and token refresh.
//!
//! These live outside the versioned trees: `/api/authentication` and
//! `/api/token`.

use axum::routing::post;
use axum::Router;

use crate::handlers::authentication;
use crate::state::AppState;

/// ```text
/// POST   /authentication          -> register_user
/// POST   /authentication/login    -> authenticate
/// POST   /token/refresh           -> refresh
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/authentication", post(authentication::register_user))
        .route("/authentication/login", post(authentication::authenticate))
        .route("/token/refresh", post(authentication::refresh))
}
