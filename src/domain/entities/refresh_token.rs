//! Refresh Token Entity
//!
//! One rotating refresh secret per member. The store keys rows by member
//! id, which enforces the single-row rule structurally; rotation replaces
//! value and expiry in place so a presented value can succeed at most once.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::value_objects::MemberId;
use crate::shared::error::{DomainError, DomainErrorCode, StoreError};
use crate::shared::guard;

/// A member's current refresh secret.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshToken {
    member_id: MemberId,
    token: String,
    expires_at: DateTime<Utc>,
}

impl RefreshToken {
    pub fn new(
        member_id: MemberId,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        guard::not_blank(token, || {
            DomainError::new(DomainErrorCode::ValueCannotBeBlank)
        })?;

        Ok(Self {
            member_id,
            token: token.to_string(),
            expires_at,
        })
    }

    /// True once the expiry instant has passed.
    pub fn is_expired(&self) -> bool {
        self.expires_at < Utc::now()
    }

    /// Replace value and expiry in place, invalidating the previous value.
    pub fn rotate(&mut self, token: &str, expires_at: DateTime<Utc>) -> Result<(), DomainError> {
        guard::not_blank(token, || {
            DomainError::new(DomainErrorCode::ValueCannotBeBlank)
        })?;

        self.token = token.to_string();
        self.expires_at = expires_at;
        Ok(())
    }

    pub fn member_id(&self) -> &MemberId {
        &self.member_id
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}

/// Persistence port for refresh tokens, one row per member.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RefreshTokenStore: Send + Sync {
    /// Find the row holding exactly this value.
    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>, StoreError>;

    /// Insert or replace the owning member's row.
    async fn save(&self, token: &RefreshToken) -> Result<(), StoreError>;

    async fn delete_by_member_id(&self, member_id: &MemberId) -> Result<(), StoreError>;

    /// Delete the row holding exactly this value, if any.
    async fn delete(&self, token: &str) -> Result<(), StoreError>;

    /// Swing the row whose value is `current` over to `next`.
    ///
    /// Compare-and-swap: returns `true` only if a row still held `current`
    /// at the moment of the write. Concurrent calls presenting the same
    /// value therefore rotate at most once.
    async fn rotate(
        &self,
        current: &str,
        next: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<bool, StoreError>;
}
