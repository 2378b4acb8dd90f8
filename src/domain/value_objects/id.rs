//! Identifier Value Types
//!
//! Opaque non-blank wrappers around identifier strings. Equality is by
//! value; the wrappers exist so the type system keeps member, guest, chat
//! user and message identifiers apart.

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use crate::shared::error::{DomainError, DomainErrorCode};
use crate::shared::guard;

/// Unique identifier of a registered member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        guard::not_blank(&value, || {
            DomainError::new(DomainErrorCode::ValueCannotBeBlank)
        })?;
        Ok(Self(value))
    }

    /// Mint a new random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier of an ephemeral guest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GuestId(String);

impl GuestId {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        guard::not_blank(&value, || {
            DomainError::new(DomainErrorCode::ValueCannotBeBlank)
        })?;
        Ok(Self(value))
    }

    /// Mint a new random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a connected chat user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
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

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier of a chat message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        guard::not_blank(&value, || {
            DomainError::new(DomainErrorCode::ValueCannotBeBlank)
        })?;
        Ok(Self(value))
    }

    /// Mint a new identifier. UUIDv7 keeps message ids sortable by
    /// creation time.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
