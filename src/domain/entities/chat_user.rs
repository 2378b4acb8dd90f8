//! Chat User Entity
//!
//! A connected chat session participant. Distinct from the identity
//! aggregates: a row exists only while the user is connected.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::value_objects::UserId;
use crate::shared::error::{DomainError, DomainErrorCode, StoreError};
use crate::shared::guard;

/// A connected chat participant.
#[derive(Debug, Clone)]
pub struct ChatUser {
    id: UserId,
    username: String,
    joined_at: DateTime<Utc>,
}

impl ChatUser {
    pub fn new(id: UserId, username: &str) -> Result<Self, DomainError> {
        guard::not_blank(username, || {
            DomainError::new(DomainErrorCode::UsernameCannotBeBlank)
        })?;

        Ok(Self {
            id,
            username: username.to_string(),
            joined_at: Utc::now(),
        })
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn joined_at(&self) -> DateTime<Utc> {
        self.joined_at
    }
}

/// Persistence port for connected chat users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatUserRepository: Send + Sync {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<ChatUser>, StoreError>;

    async fn save(&self, user: &ChatUser) -> Result<(), StoreError>;

    async fn delete(&self, id: &UserId) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_chat_user_keeps_id_and_username() {
        let id = UserId::new("alice").expect("valid id");
        let user = ChatUser::new(id.clone(), "alice").expect("valid chat user");

        assert_eq!(user.id(), &id);
        assert_eq!(user.username(), "alice");
    }

    #[test]
    fn test_blank_username_is_rejected() {
        let id = UserId::new("alice").expect("valid id");

        let error = ChatUser::new(id, "  ").expect_err("blank username");
        assert_eq!(error.code(), DomainErrorCode::UsernameCannotBeBlank);
    }
}
