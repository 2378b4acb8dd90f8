//! Member Repository Implementation
//!
//! In-memory implementation of the MemberRepository trait. Rows are plain
//! records; reads rebuild the aggregate through its reconstitution
//! factory.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::entities::{Member, MemberRepository};
use crate::domain::value_objects::{HashedPassword, MemberId};
use crate::shared::error::{DomainError, StoreError};

/// Stored row representation of a member.
#[derive(Debug, Clone)]
struct MemberRecord {
    id: String,
    username: String,
    nickname: String,
    hashed_password: String,
}

impl MemberRecord {
    fn from_member(member: &Member) -> Self {
        Self {
            id: member.id().as_str().to_string(),
            username: member.username().to_string(),
            nickname: member.nickname().to_string(),
            hashed_password: member.hashed_password().as_str().to_string(),
        }
    }

    /// Rebuild the aggregate from stored state.
    fn into_member(self) -> Result<Member, StoreError> {
        let id = MemberId::new(self.id).map_err(corrupt_row)?;
        let hashed_password = HashedPassword::new(self.hashed_password).map_err(corrupt_row)?;

        Member::reconstitute(id, &self.username, &self.nickname, hashed_password)
            .map_err(corrupt_row)
    }
}

fn corrupt_row(error: DomainError) -> StoreError {
    StoreError::Backend(format!("corrupt member row: {}", error))
}

/// In-memory member repository, indexed by member id.
#[derive(Debug, Default)]
pub struct InMemoryMemberRepository {
    rows: DashMap<String, MemberRecord>,
}

impl InMemoryMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    /// Insert or replace the member's row.
    async fn save(&self, member: &Member) -> Result<(), StoreError> {
        self.rows.insert(
            member.id().as_str().to_string(),
            MemberRecord::from_member(member),
        );
        Ok(())
    }

    /// Find a member by exact username.
    async fn find_by_username(&self, username: &str) -> Result<Option<Member>, StoreError> {
        self.rows
            .iter()
            .find(|entry| entry.username == username)
            .map(|entry| entry.value().clone().into_member())
            .transpose()
    }

    /// Find a member by id.
    async fn find_by_id(&self, id: &MemberId) -> Result<Option<Member>, StoreError> {
        self.rows
            .get(id.as_str())
            .map(|entry| entry.value().clone().into_member())
            .transpose()
    }

    /// Check whether either credential column is already taken.
    async fn exists_by_username_or_nickname(
        &self,
        username: &str,
        nickname: &str,
    ) -> Result<bool, StoreError> {
        Ok(self
            .rows
            .iter()
            .any(|entry| entry.username == username || entry.nickname == nickname))
    }
}
