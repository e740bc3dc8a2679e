//! API user model.

use corpdir_core::types::{EntityId, Timestamp};
use sqlx::FromRow;

/// A row from the `users` table. Roles live in `user_roles`.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: EntityId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub user_name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub password_hash: String,
    /// SHA-256 hex digest of the current refresh token.
    pub refresh_token_hash: Option<String>,
    pub refresh_token_expires_at: Option<Timestamp>,
}
