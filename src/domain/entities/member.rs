//! Member Aggregate
//!
//! A registered identity with credentials. Construction goes through
//! [`Member::register`], which runs the credential policy before anything
//! exists; [`Member::reconstitute`] rebuilds the aggregate from rows already
//! written by that path, re-checking structural invariants only.

use async_trait::async_trait;

use crate::domain::services::{CredentialPolicy, PasswordHasher};
use crate::domain::value_objects::{HashedPassword, MemberId, Password};
use crate::shared::error::{DomainError, DomainErrorCode, StoreError};
use crate::shared::guard;

/// A registered chat identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    id: MemberId,
    username: String,
    nickname: String,
    hashed_password: HashedPassword,
}

impl Member {
    /// Create a new member after running the full credential policy.
    ///
    /// The raw password is hashed here and dropped; only the digest is
    /// retained. Nothing is constructed when any rule fails.
    pub fn register(
        id: MemberId,
        username: &str,
        nickname: &str,
        password: Option<Password>,
        policy: &dyn CredentialPolicy,
        hasher: &dyn PasswordHasher,
    ) -> Result<Self, DomainError> {
        policy.check(username, nickname, password.as_ref())?;

        // The policy has already rejected a missing password.
        let password =
            password.ok_or_else(|| DomainError::new(DomainErrorCode::PasswordCannotBeNull))?;
        let hashed_password = hasher.hash(&password)?;

        Self::new(id, username, nickname, hashed_password)
    }

    /// Rebuild a member from trusted storage.
    ///
    /// Business rules (policy, uniqueness) were enforced when the row was
    /// written; only structural invariants are enforced again here.
    pub fn reconstitute(
        id: MemberId,
        username: &str,
        nickname: &str,
        hashed_password: HashedPassword,
    ) -> Result<Self, DomainError> {
        Self::new(id, username, nickname, hashed_password)
    }

    fn new(
        id: MemberId,
        username: &str,
        nickname: &str,
        hashed_password: HashedPassword,
    ) -> Result<Self, DomainError> {
        guard::not_blank(username, || {
            DomainError::new(DomainErrorCode::UsernameCannotBeBlank)
        })?;
        guard::not_blank(nickname, || {
            DomainError::new(DomainErrorCode::NicknameCannotBeBlank)
        })?;

        Ok(Self {
            id,
            username: username.to_string(),
            nickname: nickname.to_string(),
            hashed_password,
        })
    }

    /// Check a raw password against this member's stored credential.
    pub fn authenticate(&self, password: &Password, hasher: &dyn PasswordHasher) -> bool {
        hasher.matches(password, &self.hashed_password)
    }

    pub fn id(&self) -> &MemberId {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn hashed_password(&self) -> &HashedPassword {
        &self.hashed_password
    }
}

/// Persistence port for the member aggregate.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn save(&self, member: &Member) -> Result<(), StoreError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<Member>, StoreError>;

    async fn find_by_id(&self, id: &MemberId) -> Result<Option<Member>, StoreError>;

    async fn exists_by_username_or_nickname(
        &self,
        username: &str,
        nickname: &str,
    ) -> Result<bool, StoreError>;
}
