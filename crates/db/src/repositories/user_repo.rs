//! Repository for the `users` and `user_roles` tables.

use corpdir_core::types::{EntityId, Timestamp};
use sqlx::Executor;

use crate::models::User;
use crate::Db;

const COLUMNS: &str = "id, first_name, last_name, user_name, email, phone_number, \
                       password_hash, refresh_token_hash, refresh_token_expires_at";

pub struct UserRepo;

impl UserRepo {
    pub async fn create<'e, E>(executor: E, user: &User) -> Result<(), sqlx::Error>
    where
        E: Executor<'e, Database = Db>,
    {
        sqlx::query(
            "INSERT INTO users (id, first_name, last_name, user_name, email, phone_number, password_hash)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .bind(user.id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.user_name)
        .bind(&user.email)
        .bind(&user.phone_number)
        .bind(&user.password_hash)
        .execute(executor)
        .await?;
        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: EntityId) -> Result<Option<User>, sqlx::Error>
    where
        E: Executor<'e, Database = Db>,
    {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = ?1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    pub async fn find_by_user_name<'e, E>(
        executor: E,
        user_name: &str,
    ) -> Result<Option<User>, sqlx::Error>
    where
        E: Executor<'e, Database = Db>,
    {
        let query = format!("SELECT {COLUMNS} FROM users WHERE user_name = ?1");
        sqlx::query_as::<_, User>(&query)
            .bind(user_name)
            .fetch_optional(executor)
            .await
    }

    /// Grant the named role. Returns `false` when no such role is seeded.
    pub async fn add_role<'e, E>(
        executor: E,
        user_id: EntityId,
        role_name: &str,
    ) -> Result<bool, sqlx::Error>
    where
        E: Executor<'e, Database = Db>,
    {
        let result = sqlx::query(
            "INSERT OR IGNORE INTO user_roles (user_id, role_id)
             SELECT ?1, id FROM roles WHERE name = ?2",
        )
        .bind(user_id)
        .bind(role_name)
        .execute(executor)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Role names granted to a user, alphabetically.
    pub async fn roles_for<'e, E>(executor: E, user_id: EntityId) -> Result<Vec<String>, sqlx::Error>
    where
        E: Executor<'e, Database = Db>,
    {
        sqlx::query_scalar::<_, String>(
            "SELECT r.name FROM roles r
             JOIN user_roles ur ON ur.role_id = r.id
             WHERE ur.user_id = ?1
             ORDER BY r.name",
        )
        .bind(user_id)
        .fetch_all(executor)
        .await
    }

    /// Store (or clear) the hash of the user's current refresh token.
    pub async fn set_refresh_token<'e, E>(
        executor: E,
        user_id: EntityId,
        token_hash: Option<&str>,
        expires_at: Option<Timestamp>,
    ) -> Result<bool, sqlx::Error>
    where
        E: Executor<'e, Database = Db>,
    {
        let result = sqlx::query(
            "UPDATE users SET refresh_token_hash = ?2, refresh_token_expires_at = ?3 WHERE id = ?1",
        )
        .bind(user_id)
        .bind(token_hash)
        .bind(expires_at)
        .execute(executor)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Replace the refresh token only if `current_hash` is still the stored
    /// one. Returns `false` when another request rotated it first.
    pub async fn rotate_refresh_token<'e, E>(
        executor: E,
        user_id: EntityId,
        current_hash: &str,
        new_hash: &str,
        expires_at: Option<Timestamp>,
    ) -> Result<bool, sqlx::Error>
    where
        E: Executor<'e, Database = Db>,
    {
        let result = sqlx::query(
            "UPDATE users SET refresh_token_hash = ?3, refresh_token_expires_at = ?4
             WHERE id = ?1 AND refresh_token_hash = ?2",
        )
        .bind(user_id)
        .bind(current_hash)
        .bind(new_hash)
        .bind(expires_at)
        .execute(executor)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
