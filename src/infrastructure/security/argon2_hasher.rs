//! Argon2 Password Hasher
//!
//! PasswordHasher implementation backed by Argon2id with a random salt
//! per password.

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Argon2,
};
use tracing::{error, warn};

use crate::domain::services::PasswordHasher;
use crate::domain::value_objects::{HashedPassword, Password};
use crate::shared::error::{DomainError, DomainErrorCode};

/// Argon2id hasher with library-default parameters.
#[derive(Debug, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &Password) -> Result<HashedPassword, DomainError> {
        let salt = SaltString::generate(&mut OsRng);

        let digest = Argon2::default()
            .hash_password(password.as_str().as_bytes(), &salt)
            .map_err(|e| {
                error!(error = %e, "password hashing failed");
                DomainError::new(DomainErrorCode::CredentialHashingFailed)
            })?;

        HashedPassword::new(digest.to_string())
    }

    fn matches(&self, password: &Password, hashed: &HashedPassword) -> bool {
        let parsed = match PasswordHash::new(hashed.as_str()) {
            Ok(parsed) => parsed,
            Err(error) => {
                warn!(error = %error, "stored password hash is malformed");
                return false;
            }
        };

        Argon2::default()
            .verify_password(password.as_str().as_bytes(), &parsed)
            .is_ok()
    }
}
