//! Bcrypt password hashing and verification.
//!
//! Hashes use the standard bcrypt format with an embedded random salt, so the
//! stored string is self-describing and verification needs no extra state.

/// Bcrypt work factor. Matches the cost the existing user rows were hashed
/// with, so old and new hashes verify interchangeably.
const COST: u32 = 10;

/// Hash a plaintext password with bcrypt and a random salt.
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, COST)
}

/// Verify a plaintext password against a stored bcrypt hash.
///
/// Returns `Ok(true)` if the password matches, `Ok(false)` if it does not.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    bcrypt::verify(password, hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let password = "correct-horse-battery-staple";
        let hash = hash_password(password).expect("hashing should succeed");

        // The hash must be a bcrypt string, never the plaintext.
        assert_ne!(hash, password);
        assert!(hash.starts_with("$2"), "expected bcrypt prefix");

        let verified = verify_password(password, &hash).expect("verify should succeed");
        assert!(verified, "correct password should verify as true");
    }

    #[test]
    fn test_wrong_password_fails() {
        let hash = hash_password("real-password").expect("hashing should succeed");
        let verified = verify_password("wrong-password", &hash).expect("verify should succeed");
        assert!(!verified, "wrong password should verify as false");
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("123456").expect("hashing should succeed");
        let b = hash_password("123456").expect("hashing should succeed");
        assert_ne!(a, b, "same password must hash to different strings");
    }
}
