//! JWT Token handling
//!
//! Two token kinds share one signing key: short-lived access tokens used as
//! bearer credentials and longer-lived refresh tokens exchanged for new
//! access tokens.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::UserRole;

/// JWT configuration
#[derive(Clone, Debug)]
pub struct JwtConfig {
    /// Secret key for signing tokens
    pub secret: String,
    pub access_ttl_minutes: i64,
    pub refresh_ttl_hours: i64,
    /// Issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "change-me-in-production".to_string(),
            access_ttl_minutes: 60,
            refresh_ttl_hours: 24,
            issuer: "hotel-booking".to_string(),
        }
    }
}

impl JwtConfig {
    pub fn access_ttl_seconds(&self) -> i64 {
        self.access_ttl_minutes.saturating_mul(60)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// JWT TokenClaims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TokenClaims {
    /// Subject (user ID)
    pub sub: String,
    pub username: String,
    /// `superuser` or `regular`
    pub role: String,
    pub token_type: TokenType,
    /// Unique token id
    pub jti: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    pub iss: String,
}

impl TokenClaims {
    pub fn new(
        user_id: &str,
        username: &str,
        role: UserRole,
        token_type: TokenType,
        config: &JwtConfig,
    ) -> Self {
        let now = Utc::now();
        let ttl = match token_type {
            TokenType::Access => Duration::try_minutes(config.access_ttl_minutes),
            TokenType::Refresh => Duration::try_hours(config.refresh_ttl_hours),
        };
        let expires_at = ttl
            .and_then(|ttl| now.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self {
            sub: user_id.to_string(),
            username: username.to_string(),
            role: role.as_str().to_string(),
            token_type,
            jti: uuid::Uuid::new_v4().simple().to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
            iss: config.issuer.clone(),
        }
    }

    pub fn role(&self) -> UserRole {
        UserRole::parse(&self.role)
    }
}

/// Access and refresh token issued at login
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

pub fn create_token(
    user_id: &str,
    username: &str,
    role: UserRole,
    token_type: TokenType,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = TokenClaims::new(user_id, username, role, token_type, config);

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

pub fn create_token_pair(
    user_id: &str,
    username: &str,
    role: UserRole,
    config: &JwtConfig,
) -> Result<TokenPair, jsonwebtoken::errors::Error> {
    Ok(TokenPair {
        access: create_token(user_id, username, role, TokenType::Access, config)?,
        refresh: create_token(user_id, username, role, TokenType::Refresh, config)?,
    })
}

/// Verify signature, issuer and expiry, and decode the claims.
pub fn verify_token(
    token: &str,
    config: &JwtConfig,
) -> Result<TokenClaims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default();
    validation.set_issuer(&[&config.issuer]);
    validation.leeway = 0;

    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".into(),
            ..Default::default()
        }
    }

    #[test]
    fn access_token_round_trip() {
        let cfg = config();
        let token = create_token("u-1", "alice", UserRole::Superuser, TokenType::Access, &cfg)
            .unwrap();
        let claims = verify_token(&token, &cfg).unwrap();
        assert_eq!(claims.sub, "u-1");
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.role(), UserRole::Superuser);
        assert_eq!(claims.token_type, TokenType::Access);
    }

    #[test]
    fn pair_has_distinct_token_types() {
        let cfg = config();
        let pair = create_token_pair("u-1", "alice", UserRole::Regular, &cfg).unwrap();
        assert_ne!(pair.access, pair.refresh);
        let refresh = verify_token(&pair.refresh, &cfg).unwrap();
        assert_eq!(refresh.token_type, TokenType::Refresh);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token =
            create_token("u-1", "alice", UserRole::Regular, TokenType::Access, &config()).unwrap();
        let other = JwtConfig {
            secret: "other".into(),
            ..Default::default()
        };
        assert!(verify_token(&token, &other).is_err());
    }

    #[test]
    fn oversized_lifetime_does_not_overflow() {
        let cfg = JwtConfig {
            access_ttl_minutes: i64::MAX,
            refresh_ttl_hours: i64::MAX,
            ..config()
        };
        let claims = TokenClaims::new("u-1", "alice", UserRole::Regular, TokenType::Access, &cfg);
        assert!(claims.exp > claims.iat);
        let claims = TokenClaims::new("u-1", "alice", UserRole::Regular, TokenType::Refresh, &cfg);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn expired_token_is_rejected() {
        let cfg = JwtConfig {
            access_ttl_minutes: -5,
            ..config()
        };
        let token =
            create_token("u-1", "alice", UserRole::Regular, TokenType::Access, &cfg).unwrap();
        assert!(verify_token(&token, &cfg).is_err());
    }
}
