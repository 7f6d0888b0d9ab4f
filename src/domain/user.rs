use crate::error::{OrderError, Result};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use serde::{Deserialize, Serialize};

/// Checks the email shape: an `@` with a dot somewhere after the last `@`.
pub fn is_valid_email(email: &str) -> bool {
    email
        .rsplit_once('@')
        .is_some_and(|(_, domain)| domain.contains('.'))
}

/// A strong password is at least 8 characters with at least one letter and
/// one digit.
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(char::is_alphabetic)
        && password.chars().any(char::is_numeric)
}

/// A salted Argon2id digest. The clear-text password is never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Hashes a password with a fresh random salt.
    pub fn hash(password: &str) -> Result<Self> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| Self(hash.to_string()))
            .map_err(|_| OrderError::PasswordHash)
    }

    /// Checks a candidate password against the stored digest.
    pub fn verify(&self, candidate: &str) -> bool {
        PasswordHash::new(&self.0)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(candidate.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A registered user, keyed by email.
///
/// `confirmed` starts out false; flipping it belongs to the confirmation
/// flow (an email-link handler), which is an external collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub email: String,
    pub password: PasswordDigest,
    pub confirmed: bool,
}

impl UserRecord {
    pub fn new(email: impl Into<String>, password: PasswordDigest) -> Self {
        Self {
            email: email.into(),
            password,
            confirmed: false,
        }
    }
}
