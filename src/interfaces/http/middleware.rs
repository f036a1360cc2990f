//! Authentication middleware for Axum

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::{Actor, UserRole};
use crate::infrastructure::crypto::jwt::{verify_token, JwtConfig, TokenClaims, TokenType};
use crate::interfaces::http::common::ApiResponse;

/// Authentication error types
#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
    WrongTokenType,
}

impl AuthError {
    fn message(&self) -> &'static str {
        match self {
            Self::MissingToken => "Authentication credentials were not provided.",
            Self::InvalidToken => "Given token not valid for any token type",
            Self::WrongTokenType => "Token has wrong type",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, "Bearer")],
            Json(ApiResponse::<()>::error(self.message())),
        )
            .into_response()
    }
}

/// Authentication state containing JWT config
#[derive(Clone)]
pub struct AuthState {
    pub jwt_config: JwtConfig,
}

/// Caller identity decoded from a valid access token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub username: String,
    pub role: UserRole,
}

impl AuthenticatedUser {
    pub fn from_claims(claims: TokenClaims) -> Self {
        let role = claims.role();
        Self {
            user_id: claims.sub,
            username: claims.username,
            role,
        }
    }
}

impl Actor for AuthenticatedUser {
    fn actor_id(&self) -> &str {
        &self.user_id
    }

    fn role(&self) -> UserRole {
        self.role
    }
}

fn extract_token(auth_header: &str) -> Option<&str> {
    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Bearer-token authentication middleware.
///
/// Only access tokens are accepted; refresh tokens are rejected.
pub async fn auth_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let Some(auth_header) = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    else {
        return AuthError::MissingToken.into_response();
    };

    let Some(token) = extract_token(auth_header) else {
        return AuthError::InvalidToken.into_response();
    };

    let claims = match verify_token(token, &auth_state.jwt_config) {
        Ok(claims) => claims,
        Err(_) => return AuthError::InvalidToken.into_response(),
    };
    if claims.token_type != TokenType::Access {
        return AuthError::WrongTokenType.into_response();
    }

    request
        .extensions_mut()
        .insert(AuthenticatedUser::from_claims(claims));
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_prefix_is_required() {
        assert_eq!(extract_token("Bearer abc.def"), Some("abc.def"));
        assert_eq!(extract_token("Token abc.def"), None);
        assert_eq!(extract_token("Bearer   "), None);
    }
}
