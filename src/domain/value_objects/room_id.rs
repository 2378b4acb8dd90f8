//! Room Identifier Derivation
//!
//! A room id is a pure function of its two participants, so the same pair
//! always resolves to the same room no matter which side initiates.

use std::fmt;

use serde::Serialize;

use crate::domain::value_objects::UserId;
use crate::shared::error::{DomainError, DomainErrorCode};
use crate::shared::guard;

/// Deterministic identifier of a two-person chat room.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    /// Derive the id for an unordered pair of distinct users.
    ///
    /// The raw identifiers are sorted lexicographically and joined as
    /// `chat:<min>:<max>`.
    pub fn of(a: &UserId, b: &UserId) -> Result<Self, DomainError> {
        guard::ensure(a != b, || {
            DomainError::new(DomainErrorCode::InvalidParticipants)
                .detail("user_id", a.as_str())
        })?;

        let (first, second) = if a.as_str() <= b.as_str() {
            (a, b)
        } else {
            (b, a)
        };
        Ok(Self(format!("chat:{}:{}", first.as_str(), second.as_str())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
