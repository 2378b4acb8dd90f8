//! Chat User Repository Implementation
//!
//! In-memory implementation of the ChatUserRepository trait. Holds the
//! currently connected users, indexed by user id.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::entities::{ChatUser, ChatUserRepository};
use crate::domain::value_objects::UserId;
use crate::shared::error::StoreError;

/// In-memory chat user repository.
#[derive(Debug, Default)]
pub struct InMemoryChatUserRepository {
    rows: DashMap<String, ChatUser>,
}

impl InMemoryChatUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChatUserRepository for InMemoryChatUserRepository {
    /// Find a connected user by id.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<ChatUser>, StoreError> {
        Ok(self.rows.get(id.as_str()).map(|entry| entry.value().clone()))
    }

    /// Insert or replace the user's row.
    async fn save(&self, user: &ChatUser) -> Result<(), StoreError> {
        self.rows
            .insert(user.id().as_str().to_string(), user.clone());
        Ok(())
    }

    /// Delete the user's row, if any.
    async fn delete(&self, id: &UserId) -> Result<(), StoreError> {
        self.rows.remove(id.as_str());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(raw: &str) -> ChatUser {
        ChatUser::new(UserId::new(raw).expect("valid id"), raw).expect("valid chat user")
    }

    #[tokio::test]
    async fn test_saved_user_is_found_until_deleted() {
        let repository = InMemoryChatUserRepository::new();
        let alice = user("alice");

        repository.save(&alice).await.expect("saved");
        assert!(repository
            .find_by_id(alice.id())
            .await
            .expect("readable")
            .is_some());

        repository.delete(alice.id()).await.expect("deleted");
        assert!(repository
            .find_by_id(alice.id())
            .await
            .expect("readable")
            .is_none());
    }

    #[tokio::test]
    async fn test_delete_of_absent_user_is_a_no_op() {
        let repository = InMemoryChatUserRepository::new();

        repository
            .delete(&UserId::new("missing").expect("valid id"))
            .await
            .expect("no-op delete");
    }
}
