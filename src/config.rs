//! Application configuration
//!
//! Loaded from a TOML file (default `~/.config/hotel-booking/config.toml`).
//! A missing file yields the defaults; `DATABASE_URL` and `JWT_SECRET`
//! override the file when set.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::infrastructure::database::DatabaseConfig;

const DEFAULT_JWT_SECRET: &str = "change-me-in-production";
/// One year
const MAX_ACCESS_TTL_MINUTES: i64 = 525_600;
/// Ten years
const MAX_REFRESH_TTL_HOURS: i64 = 87_600;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Default config location: `~/.config/hotel-booking/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hotel-booking")
        .join("config.toml")
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSection,
    pub security: SecurityConfig,
    pub admin: AdminConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds to wait for in-flight requests on shutdown
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            shutdown_timeout: 30,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        let db = DatabaseConfig::default();
        Self {
            url: db.url,
            max_connections: db.max_connections,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    pub access_token_ttl_minutes: i64,
    pub refresh_token_ttl_hours: i64,
    pub issuer: String,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        let jwt = JwtConfig::default();
        Self {
            jwt_secret: jwt.secret,
            access_token_ttl_minutes: jwt.access_ttl_minutes,
            refresh_token_ttl_hours: jwt.refresh_ttl_hours,
            issuer: jwt.issuer,
        }
    }
}

/// Superuser created on first start when the user table is empty
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub username: String,
    pub email: Option<String>,
    pub password: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            email: Some("admin@example.com".to_string()),
            password: "admin".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `text` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from `path`, falling back to defaults if the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            Self::from_toml(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            Self::default()
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            if !url.is_empty() {
                self.database.url = url;
            }
        }
        if let Ok(secret) = std::env::var("JWT_SECRET") {
            if !secret.is_empty() {
                self.security.jwt_secret = secret;
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must be non-zero".into()));
        }
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Invalid("database.url must not be empty".into()));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Invalid(
                "database.max_connections must be at least 1".into(),
            ));
        }
        if self.security.jwt_secret.is_empty() {
            return Err(ConfigError::Invalid("security.jwt_secret must not be empty".into()));
        }
        if !(1..=MAX_ACCESS_TTL_MINUTES).contains(&self.security.access_token_ttl_minutes) {
            return Err(ConfigError::Invalid(format!(
                "security.access_token_ttl_minutes must be between 1 and {}",
                MAX_ACCESS_TTL_MINUTES
            )));
        }
        if !(1..=MAX_REFRESH_TTL_HOURS).contains(&self.security.refresh_token_ttl_hours) {
            return Err(ConfigError::Invalid(format!(
                "security.refresh_token_ttl_hours must be between 1 and {}",
                MAX_REFRESH_TTL_HOURS
            )));
        }
        if self.admin.username.is_empty() || self.admin.password.is_empty() {
            return Err(ConfigError::Invalid(
                "admin.username and admin.password must not be empty".into(),
            ));
        }
        match self.logging.format.to_lowercase().as_str() {
            "text" | "json" => Ok(()),
            other => Err(ConfigError::Invalid(format!(
                "logging.format must be 'text' or 'json', got '{}'",
                other
            ))),
        }
    }

    /// Apply command-line overrides and validate the result.
    pub fn with_overrides(
        mut self,
        port: Option<u16>,
        log_level: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(port) = port {
            self.server.port = port;
        }
        if let Some(level) = log_level {
            self.logging.level = level;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn uses_default_secret(&self) -> bool {
        self.security.jwt_secret == DEFAULT_JWT_SECRET
    }

    pub fn jwt_config(&self) -> JwtConfig {
        JwtConfig {
            secret: self.security.jwt_secret.clone(),
            access_ttl_minutes: self.security.access_token_ttl_minutes,
            refresh_ttl_hours: self.security.refresh_token_ttl_hours,
            issuer: self.security.issuer.clone(),
        }
    }

    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.database.url.clone(),
            max_connections: self.database.max_connections,
        }
    }
}
