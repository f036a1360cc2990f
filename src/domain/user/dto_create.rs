use super::UserRole;

/// Data needed to persist a new user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserDto {
    pub username: String,
    pub email: Option<String>,
    pub password_hash: String,
    pub role: UserRole,
}
