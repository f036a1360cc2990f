//! Authentication DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::User;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 150, message = "username must be 1-150 characters"))]
    pub username: String,
    #[validate(length(min = 1, max = 128, message = "password must be 1-128 characters"))]
    pub password: String,
    #[validate(email(message = "Enter a valid email address."))]
    #[serde(default)]
    pub email: Option<String>,
}

/// Public view of a user. The password hash is never serialized.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    /// `superuser` or `regular`
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenPairResponse {
    pub access: String,
    pub refresh: String,
    pub token_type: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RefreshRequest {
    #[validate(length(min = 1, message = "refresh token is required"))]
    pub refresh: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AccessTokenResponse {
    pub access: String,
    pub token_type: String,
    pub expires_in: i64,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct VerifyRequest {
    #[validate(length(min = 1, message = "token is required"))]
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::domain::UserRole;

    #[test]
    fn user_response_omits_password_hash() {
        let now = Utc::now();
        let user = User {
            id: "u-1".into(),
            username: "bob".into(),
            email: None,
            password_hash: "$2b$04$secret".into(),
            role: UserRole::Regular,
            is_active: true,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        };
        let json = serde_json::to_string(&UserResponse::from(user)).unwrap();
        assert!(!json.contains("secret"));
        assert!(!json.contains("password"));
        assert!(json.contains("\"role\":\"regular\""));
    }

    #[test]
    fn register_rejects_malformed_email() {
        let req: RegisterRequest = serde_json::from_value(serde_json::json!({
            "username": "bob",
            "password": "pw",
            "email": "not-an-email"
        }))
        .unwrap();
        assert!(req.validate().is_err());
    }
}
