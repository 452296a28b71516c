use bcrypt::{DEFAULT_COST, hash, verify};

/// Hash a password for storage. bcrypt generates and embeds the salt.
pub fn hash_password(plain: &str) -> Result<String, bcrypt::BcryptError> {
    hash(plain, DEFAULT_COST)
}

/// Compare a candidate password against a stored hash. A malformed hash
/// counts as a mismatch rather than an error.
pub fn verify_password(plain: &str, hashed: &str) -> bool {
    verify(plain, hashed).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_password_verifies() {
        let hashed = hash_password("admin123").unwrap();
        assert!(verify_password("admin123", &hashed));
    }

    #[test]
    fn wrong_password_is_rejected() {
        let hashed = hash_password("admin123").unwrap();
        assert!(!verify_password("letmein", &hashed));
    }

    #[test]
    fn garbage_hash_is_a_mismatch_not_a_panic() {
        assert!(!verify_password("admin123", "not-a-bcrypt-hash"));
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_password("admin123").unwrap();
        let b = hash_password("admin123").unwrap();
        assert_ne!(a, b);
    }
}
