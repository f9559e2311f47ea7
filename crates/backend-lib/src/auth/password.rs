// ============================
// catalog-backend/src/auth/password.rs
// ============================
//! Password hashing and verification.
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use zeroize::Zeroize;

/// Hash a password using argon2
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("{e}"))?
        .to_string();
    Ok(hash)
}

/// Verify a password against a hash
pub fn verify_password(hash: &str, plain: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(h) => h,
        Err(_) => return false,
    };
    Argon2::default()
        .verify_password(plain.as_bytes(), &parsed_hash)
        .is_ok()
}

/// Hash a password and zeroize the plaintext
pub fn hash_password_secure(plain: &mut String) -> anyhow::Result<String> {
    let hash = hash_password(plain)?;
    plain.zeroize();
    Ok(hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_differs_from_plaintext() {
        let hash = hash_password("Secret123").unwrap();
        assert_ne!(hash, "Secret123");
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn verify_accepts_correct_password() {
        let hash = hash_password("Secret123").unwrap();
        assert!(verify_password(&hash, "Secret123"));
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let hash = hash_password("Secret123").unwrap();
        assert!(!verify_password(&hash, "Secret124"));
    }

    #[test]
    fn verify_rejects_malformed_hash() {
        assert!(!verify_password("not-a-phc-string", "Secret123"));
    }

    #[test]
    fn secure_hash_clears_plaintext() {
        let mut plain = "Secret123".to_string();
        let hash = hash_password_secure(&mut plain).unwrap();
        assert!(plain.is_empty());
        assert!(verify_password(&hash, "Secret123"));
    }

    #[test]
    fn same_password_hashes_differently() {
        // fresh salt per hash
        let first = hash_password("Secret123").unwrap();
        let second = hash_password("Secret123").unwrap();
        assert_ne!(first, second);
    }
}
