//! Credential Value Types
//!
//! `Password` holds the raw secret a caller submitted and lives only for the
//! duration of registration or authentication. `HashedPassword` is the only
//! representation that may be stored.

use std::fmt;

use crate::domain::value_objects::PasswordStrength;
use crate::shared::error::{DomainError, DomainErrorCode};
use crate::shared::guard;

/// A raw password as received from a caller. Never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        guard::not_blank(&value, || {
            DomainError::new(DomainErrorCode::ValueCannotBeBlank)
        })?;
        Ok(Self(value))
    }

    /// Raw secret. Restricted to the crate so only hashing and strength
    /// evaluation ever read it.
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }

    /// Classify this password, rejecting values outside the accepted
    /// character set or below the minimum length.
    pub fn strength(&self) -> Result<PasswordStrength, DomainError> {
        PasswordStrength::evaluate(self)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// An opaque one-way digest produced by the hashing port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedPassword(String);

impl HashedPassword {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        guard::not_blank(&value, || {
            DomainError::new(DomainErrorCode::ValueCannotBeBlank)
        })?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
