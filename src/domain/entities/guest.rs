//! Guest Aggregate
//!
//! An ephemeral identity created at login and never authenticated again.
//! Guests carry no credential; their session ends when the access token
//! expires.

use async_trait::async_trait;

use crate::domain::value_objects::GuestId;
use crate::shared::error::{DomainError, DomainErrorCode, StoreError};
use crate::shared::guard;

/// An ephemeral, unregistered chat identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Guest {
    id: GuestId,
    nickname: String,
}

impl Guest {
    pub fn new(id: GuestId, nickname: &str) -> Result<Self, DomainError> {
        guard::not_blank(nickname, || {
            DomainError::new(DomainErrorCode::NicknameCannotBeBlank)
        })?;

        Ok(Self {
            id,
            nickname: nickname.to_string(),
        })
    }

    pub fn id(&self) -> &GuestId {
        &self.id
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }
}

/// Persistence port for the guest aggregate.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GuestRepository: Send + Sync {
    async fn save(&self, guest: &Guest) -> Result<(), StoreError>;
}

/// Source of guest identifiers that never collide with ones in use.
#[cfg_attr(test, mockall::automock)]
pub trait GuestIdGenerator: Send + Sync {
    fn generate(&self) -> GuestId;
}
