use chrono::{DateTime, Utc};

use crate::domain::authorization::Actor;

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserRole {
    /// May create, update and delete hotels and rooms.
    Superuser,
    #[default]
    Regular,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Superuser => "superuser",
            Self::Regular => "regular",
        }
    }

    /// Unknown values fall back to the least privileged role.
    pub fn parse(s: &str) -> Self {
        match s {
            "superuser" => Self::Superuser,
            _ => Self::Regular,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User model
#[derive(Clone, Debug)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub password_hash: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl Actor for User {
    fn actor_id(&self) -> &str {
        &self.id
    }

    fn role(&self) -> UserRole {
        self.role
    }
}
