//! User service — application-layer orchestration
//!
//! HTTP handlers are thin wrappers that delegate to this service.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::authorization::REGISTRATION_POLICY;
use crate::domain::{
    CreateUserDto, DomainError, DomainResult, Operation, RepositoryProvider, User, UserRole,
};
use crate::infrastructure::crypto::jwt::{
    create_token, create_token_pair, verify_token, JwtConfig, TokenClaims, TokenType,
};
use crate::infrastructure::crypto::password::{
    hash_password, verify_password, MAX_PASSWORD_BYTES,
};

const INVALID_CREDENTIALS: &str = "No active account found with the given credentials";
const INVALID_TOKEN: &str = "Token is invalid or expired";
const USERNAME_MAX_LEN: usize = 150;

/// Token pair returned after a successful login
#[derive(Debug, Clone)]
pub struct AuthTokens {
    pub access: String,
    pub refresh: String,
    pub token_type: &'static str,
    /// Access token lifetime in seconds
    pub expires_in: i64,
    pub user: User,
}

/// Fresh access token returned by a refresh
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub access: String,
    pub token_type: &'static str,
    pub expires_in: i64,
}

pub struct UserService {
    repos: Arc<dyn RepositoryProvider>,
    jwt_config: JwtConfig,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, jwt_config: JwtConfig, bcrypt_cost: u32) -> Self {
        Self {
            repos,
            jwt_config,
            bcrypt_cost,
        }
    }

    pub fn jwt_config(&self) -> &JwtConfig {
        &self.jwt_config
    }

    // ── Registration ────────────────────────────────────────────

    /// Register a new regular user.
    pub async fn register(
        &self,
        username: &str,
        email: Option<&str>,
        password: &str,
    ) -> DomainResult<User> {
        REGISTRATION_POLICY.authorize(None, Operation::Create)?;
        let user = self
            .create_user(username, email, password, UserRole::Regular)
            .await?;
        info!(user_id = %user.id, username = %user.username, "New user registered");
        Ok(user)
    }

    /// Create the configured superuser when the user table is empty.
    ///
    /// Returns the created user, or `None` if users already exist.
    pub async fn ensure_superuser(
        &self,
        username: &str,
        email: Option<&str>,
        password: &str,
    ) -> DomainResult<Option<User>> {
        if self.repos.users().count().await? > 0 {
            return Ok(None);
        }
        let user = self
            .create_user(username, email, password, UserRole::Superuser)
            .await?;
        warn!(
            username = %user.username,
            "Created default superuser; change its password before exposing the service"
        );
        Ok(Some(user))
    }

    async fn create_user(
        &self,
        username: &str,
        email: Option<&str>,
        password: &str,
        role: UserRole,
    ) -> DomainResult<User> {
        validate_username(username)?;
        validate_password(password)?;

        let password_hash = hash_password(password, self.bcrypt_cost)
            .map_err(|e| DomainError::Storage(format!("Failed to hash password: {}", e)))?;

        self.repos
            .users()
            .create(CreateUserDto {
                username: username.to_string(),
                email: email.filter(|e| !e.is_empty()).map(str::to_string),
                password_hash,
                role,
            })
            .await
    }

    // ── Tokens ──────────────────────────────────────────────────

    /// Check credentials and issue an access/refresh pair.
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<AuthTokens> {
        let Some(user) = self.repos.users().find_by_username(username).await? else {
            return Err(DomainError::Unauthorized(INVALID_CREDENTIALS.into()));
        };

        if !user.is_active || !verify_password(password, &user.password_hash).unwrap_or(false) {
            return Err(DomainError::Unauthorized(INVALID_CREDENTIALS.into()));
        }

        let pair = create_token_pair(&user.id, &user.username, user.role, &self.jwt_config)
            .map_err(token_err)?;
        self.repos.users().record_login(&user.id).await?;

        info!(user_id = %user.id, username = %user.username, "User logged in");
        Ok(AuthTokens {
            access: pair.access,
            refresh: pair.refresh,
            token_type: "Bearer",
            expires_in: self.jwt_config.access_ttl_seconds(),
            user,
        })
    }

    /// Exchange a refresh token for a new access token.
    ///
    /// The role is re-read from storage so a demoted user does not keep
    /// superuser rights through refreshes.
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<AccessToken> {
        let claims = self.decode(refresh_token)?;
        if claims.token_type != TokenType::Refresh {
            return Err(DomainError::Unauthorized(INVALID_TOKEN.into()));
        }

        let user = self
            .repos
            .users()
            .find_by_id(&claims.sub)
            .await?
            .filter(|u| u.is_active)
            .ok_or_else(|| DomainError::Unauthorized(INVALID_TOKEN.into()))?;

        let access = create_token(
            &user.id,
            &user.username,
            user.role,
            TokenType::Access,
            &self.jwt_config,
        )
        .map_err(token_err)?;

        Ok(AccessToken {
            access,
            token_type: "Bearer",
            expires_in: self.jwt_config.access_ttl_seconds(),
        })
    }

    /// Succeeds for any unexpired token signed by this service.
    pub fn verify(&self, token: &str) -> DomainResult<()> {
        self.decode(token).map(|_| ())
    }

    fn decode(&self, token: &str) -> DomainResult<TokenClaims> {
        verify_token(token, &self.jwt_config)
            .map_err(|_| DomainError::Unauthorized(INVALID_TOKEN.into()))
    }
}

fn token_err(e: jsonwebtoken::errors::Error) -> DomainError {
    DomainError::Storage(format!("Failed to create token: {}", e))
}

/// Non-blank and within bcrypt's input limit, counted in bytes.
fn validate_password(password: &str) -> DomainResult<()> {
    if password.is_empty() {
        return Err(DomainError::invalid_field("password", "This field may not be blank."));
    }
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(DomainError::invalid_field(
            "password",
            format!("Ensure this field has no more than {MAX_PASSWORD_BYTES} bytes."),
        ));
    }
    Ok(())
}

/// Letters, digits and `@ . + - _`, at most 150 characters.
fn validate_username(username: &str) -> DomainResult<()> {
    if username.trim().is_empty() {
        return Err(DomainError::invalid_field("username", "This field may not be blank."));
    }
    if username.chars().count() > USERNAME_MAX_LEN {
        return Err(DomainError::invalid_field(
            "username",
            "Ensure this field has no more than 150 characters.",
        ));
    }
    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
    {
        return Err(DomainError::invalid_field(
            "username",
            "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usernames_allow_common_symbols() {
        assert!(validate_username("alice.smith+test@example-1_x").is_ok());
    }

    #[test]
    fn usernames_reject_spaces_and_blank() {
        assert!(validate_username("alice smith").is_err());
        assert!(validate_username("   ").is_err());
        assert!(validate_username(&"a".repeat(151)).is_err());
    }

    #[test]
    fn password_limit_counts_bytes_not_chars() {
        assert!(validate_password(&"a".repeat(72)).is_ok());
        assert!(validate_password(&"a".repeat(73)).is_err());
        // 25 three-byte characters: 75 bytes
        assert!(validate_password(&"€".repeat(25)).is_err());
        assert!(validate_password("").is_err());
    }
}
