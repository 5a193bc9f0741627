use argon2::Config as ArgonConfig;
use rand::Rng;

use crate::utils::error::AppError;

/// Password acceptance rules, selected per principal kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordPolicy {
    /// Length floor only (admin registration).
    Basic,
    /// Length ≥ 8 with lowercase, uppercase, digit and symbol (user
    /// registration).
    Strong,
}

impl PasswordPolicy {
    /// Checks a candidate against the policy, returning the detail string
    /// the API reports on rejection.
    pub fn check(self, password: &str) -> Result<(), &'static str> {
        match self {
            PasswordPolicy::Basic => {
                if password.chars().count() < 6 {
                    return Err("Password must be at least 6 characters.");
                }
                Ok(())
            }
            PasswordPolicy::Strong => {
                let long_enough = password.chars().count() >= 8;
                let lower = password.chars().any(|c| c.is_ascii_lowercase());
                let upper = password.chars().any(|c| c.is_ascii_uppercase());
                let digit = password.chars().any(|c| c.is_ascii_digit());
                let symbol = password.chars().any(|c| !c.is_ascii_alphanumeric());
                if !(long_enough && lower && upper && digit && symbol) {
                    return Err("Password must be at least 8 characters, include uppercase, lowercase, number, and special character.");
                }
                Ok(())
            }
        }
    }
}

/// One-way hash with a fresh random salt. Plaintext is never stored.
pub fn hash(password: &str) -> Result<String, AppError> {
    let salt: [u8; 16] = rand::thread_rng().gen();
    argon2::hash_encoded(password.as_bytes(), &salt, &ArgonConfig::default())
        .map_err(|e| AppError::InternalServerError(format!("Password hashing failed: {}", e)))
}

/// Constant-time check of a candidate against a stored encoded hash. Any
/// malformed stored value counts as a mismatch.
pub fn verify(encoded: &str, candidate: &str) -> bool {
    argon2::verify_encoded(encoded, candidate.as_bytes()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trip() {
        let encoded = hash("secret1").unwrap();
        assert!(verify(&encoded, "secret1"));
        assert!(!verify(&encoded, "secret2"));
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash("secret1").unwrap();
        let b = hash("secret1").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn verify_rejects_malformed_stored_value() {
        assert!(!verify("not-an-encoded-hash", "secret1"));
    }

    #[test]
    fn basic_policy_enforces_length_floor() {
        assert!(PasswordPolicy::Basic.check("secret1").is_ok());
        assert_eq!(
            PasswordPolicy::Basic.check("abc12"),
            Err("Password must be at least 6 characters.")
        );
    }

    #[test]
    fn strong_policy_requires_all_classes() {
        assert!(PasswordPolicy::Strong.check("Str0ng!pass").is_ok());
        // missing symbol
        assert!(PasswordPolicy::Strong.check("Weak1").is_err());
        assert!(PasswordPolicy::Strong.check("Weakness1").is_err());
        // missing uppercase
        assert!(PasswordPolicy::Strong.check("weakness1!").is_err());
        // missing digit
        assert!(PasswordPolicy::Strong.check("Weakness!").is_err());
        // too short
        assert!(PasswordPolicy::Strong.check("W1!a").is_err());
        // underscore counts as a symbol
        assert!(PasswordPolicy::Strong.check("Str0ng_pass").is_ok());
    }
}
