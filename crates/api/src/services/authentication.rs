use chrono::Utc;
use corpdir_core::dto::{TokenDto, UserForAuthenticationDto, UserForRegistrationDto};
use corpdir_core::error::CoreError;
use corpdir_core::roles::is_known_role;
use corpdir_core::types::{new_id, EntityId};
use corpdir_db::models::User;
use corpdir_db::repositories::UserRepo;
use corpdir_db::{DbPool, UnitOfWork};

use crate::auth::jwt::{
    generate_access_token, generate_refresh_token, hash_refresh_token,
    validate_token_ignoring_expiry, JwtConfig,
};
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};

const INVALID_LOGIN: &str = "Invalid user name or password";
const INVALID_REFRESH: &str = "Invalid client request. The tokenDto has some invalid properties.";

pub struct AuthenticationService {
    pool: DbPool,
    jwt: JwtConfig,
}

impl AuthenticationService {
    pub fn new(pool: DbPool, jwt: JwtConfig) -> Self {
        Self { pool, jwt }
    }

    /// Create a user with the requested roles. Returns the new user's id.
    pub async fn register_user(&self, dto: &UserForRegistrationDto) -> AppResult<EntityId> {
        if let Some(role) = dto.roles.iter().find(|r| !is_known_role(r)) {
            return Err(AppError::bad_request(format!("Role '{role}' does not exist.")));
        }

        if UserRepo::find_by_user_name(&self.pool, &dto.user_name)
            .await?
            .is_some()
        {
            return Err(CoreError::Conflict(format!(
                "Username '{}' is already taken.",
                dto.user_name
            ))
            .into());
        }

        let password_hash = hash_password(&dto.password)
            .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

        let user = User {
            id: new_id(),
            first_name: dto.first_name.clone(),
            last_name: dto.last_name.clone(),
            user_name: dto.user_name.clone(),
            email: dto.email.clone(),
            phone_number: dto.phone_number.clone(),
            password_hash,
            refresh_token_hash: None,
            refresh_token_expires_at: None,
        };

        let mut uow = UnitOfWork::begin(&self.pool).await?;
        UserRepo::create(uow.conn(), &user).await?;
        for role in &dto.roles {
            UserRepo::add_role(uow.conn(), user.id, role).await?;
        }
        uow.save().await?;

        tracing::info!(user_id = %user.id, user_name = %user.user_name, roles = ?dto.roles, "User registered");
        Ok(user.id)
    }

    /// Check credentials, returning the matching user.
    pub async fn validate_user(&self, dto: &UserForAuthenticationDto) -> AppResult<User> {
        let user = UserRepo::find_by_user_name(&self.pool, &dto.user_name).await?;

        let valid = match &user {
            Some(user) => verify_password(&dto.password, &user.password_hash).map_err(|e| {
                AppError::InternalError(format!("Password verification error: {e}"))
            })?,
            None => false,
        };

        match user {
            Some(user) if valid => Ok(user),
            _ => {
                tracing::warn!(user_name = %dto.user_name, "Authentication failed: wrong user name or password");
                Err(CoreError::Unauthorized(INVALID_LOGIN.into()).into())
            }
        }
    }

    /// Issue a fresh access/refresh token pair for `user`.
    ///
    /// With `populate_exp` the refresh token gets a new expiry; otherwise the
    /// current expiry carries over.
    pub async fn create_token(&self, user: &User, populate_exp: bool) -> AppResult<TokenDto> {
        let (tokens, refresh_hash) = self.issue_pair(user).await?;
        let expires_at = if populate_exp {
            Some(Utc::now() + chrono::Duration::days(self.jwt.refresh_token_expiry_days))
        } else {
            user.refresh_token_expires_at
        };
        UserRepo::set_refresh_token(&self.pool, user.id, Some(&refresh_hash), expires_at).await?;
        Ok(tokens)
    }

    /// Exchange a (possibly expired) access token and its live refresh token
    /// for a new pair. The rotated refresh token keeps the current expiry.
    ///
    /// Rotation only succeeds against the hash that was checked, so the same
    /// refresh token can be redeemed once.
    pub async fn refresh_token(&self, dto: &TokenDto) -> AppResult<TokenDto> {
        let invalid = || AppError::bad_request(INVALID_REFRESH);

        let claims = validate_token_ignoring_expiry(&dto.access_token, &self.jwt)
            .map_err(|_| invalid())?;
        let user_id = claims.sub.parse::<EntityId>().map_err(|_| invalid())?;
        let user = UserRepo::find_by_id(&self.pool, user_id)
            .await?
            .ok_or_else(invalid)?;

        let presented = hash_refresh_token(&dto.refresh_token);
        let still_valid = user.refresh_token_hash.as_deref() == Some(presented.as_str())
            && user
                .refresh_token_expires_at
                .is_some_and(|expires| expires > Utc::now());
        if !still_valid {
            tracing::warn!(%user_id, "Rejected refresh request");
            return Err(invalid());
        }

        let (tokens, refresh_hash) = self.issue_pair(&user).await?;
        let rotated = UserRepo::rotate_refresh_token(
            &self.pool,
            user.id,
            &presented,
            &refresh_hash,
            user.refresh_token_expires_at,
        )
        .await?;
        if !rotated {
            tracing::warn!(%user_id, "Refresh token already redeemed");
            return Err(invalid());
        }
        Ok(tokens)
    }

    /// Sign an access token and mint a refresh token, returning the pair and
    /// the refresh token's hash for storage.
    async fn issue_pair(&self, user: &User) -> AppResult<(TokenDto, String)> {
        let roles = UserRepo::roles_for(&self.pool, user.id).await?;
        let access_token = generate_access_token(user.id, &user.user_name, &roles, &self.jwt)
            .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;
        let (refresh_token, refresh_hash) = generate_refresh_token();
        Ok((
            TokenDto {
                access_token,
                refresh_token,
            },
            refresh_hash,
        ))
    }
}
