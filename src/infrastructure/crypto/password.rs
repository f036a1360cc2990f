//! Password hashing utilities

use bcrypt::{hash, verify};

pub use bcrypt::DEFAULT_COST;

/// bcrypt only reads this many bytes of input.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Hash a password using bcrypt. Inputs longer than [`MAX_PASSWORD_BYTES`]
/// are refused instead of silently truncated.
pub fn hash_password(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(bcrypt::BcryptError::InvalidHash(format!(
            "password exceeds {} bytes",
            MAX_PASSWORD_BYTES
        )));
    }
    hash(password, cost)
}

/// Verify a password against a hash. Over-long input never matches.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Ok(false);
    }
    verify(password, hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_only_original_password() {
        let hashed = hash_password("s3cret-pass", 4).unwrap();
        assert_ne!(hashed, "s3cret-pass");
        assert!(verify_password("s3cret-pass", &hashed).unwrap());
        assert!(!verify_password("wrong", &hashed).unwrap());
    }

    #[test]
    fn input_past_bcrypt_limit_is_not_truncated() {
        let stored = "a".repeat(MAX_PASSWORD_BYTES);
        let hashed = hash_password(&stored, 4).unwrap();
        assert!(verify_password(&stored, &hashed).unwrap());
        assert!(!verify_password(&format!("{stored}suffix"), &hashed).unwrap());
        assert!(hash_password(&format!("{stored}x"), 4).is_err());
    }
}
