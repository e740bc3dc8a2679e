use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/authentication`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserForRegistrationDto {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, max = 64, message = "Username is required"))]
    pub user_name: String,

    #[serde(default)]
    #[validate(length(min = 10, message = "Password is required and must be at least 10 characters"))]
    pub password: String,

    #[serde(default)]
    #[validate(email(message = "Email must be a valid address"))]
    pub email: Option<String>,

    #[serde(default)]
    pub phone_number: Option<String>,

    #[serde(default)]
    pub roles: Vec<String>,
}

/// Body of `POST /api/authentication/login`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserForAuthenticationDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "User name is required"))]
    pub user_name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Access/refresh token pair returned by login and sent back to refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TokenDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "Access token is required"))]
    pub access_token: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}
