//! Refresh Token Store Implementation
//!
//! In-memory implementation of the RefreshTokenStore trait. Rows are
//! keyed by member id, which enforces the one-token-per-member rule, and
//! rotation runs under a single write lock so only one of two concurrent
//! refreshes holding the same value can win.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::domain::entities::{RefreshToken, RefreshTokenStore};
use crate::domain::value_objects::MemberId;
use crate::shared::error::StoreError;

/// In-memory refresh token store.
#[derive(Debug, Default)]
pub struct InMemoryRefreshTokenStore {
    rows: RwLock<HashMap<MemberId, RefreshToken>>,
}

impl InMemoryRefreshTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RefreshTokenStore for InMemoryRefreshTokenStore {
    /// Find the row holding exactly this token value.
    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>, StoreError> {
        let rows = self.rows.read();
        Ok(rows.values().find(|row| row.token() == token).cloned())
    }

    /// Insert or replace the owning member's row.
    async fn save(&self, token: &RefreshToken) -> Result<(), StoreError> {
        self.rows
            .write()
            .insert(token.member_id().clone(), token.clone());
        Ok(())
    }

    /// Delete the member's row, if any.
    async fn delete_by_member_id(&self, member_id: &MemberId) -> Result<(), StoreError> {
        self.rows.write().remove(member_id);
        Ok(())
    }

    /// Delete the row holding exactly this token value, if any.
    async fn delete(&self, token: &str) -> Result<(), StoreError> {
        self.rows.write().retain(|_, row| row.token() != token);
        Ok(())
    }

    /// Swing the row holding `current` over to `next`.
    ///
    /// The write lock spans lookup and swap, so two concurrent calls
    /// presenting the same current value cannot both succeed.
    async fn rotate(
        &self,
        current: &str,
        next: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<bool, StoreError> {
        let mut rows = self.rows.write();
        match rows.values_mut().find(|row| row.token() == current) {
            Some(row) => {
                row.rotate(next, expires_at)
                    .map_err(|error| StoreError::Backend(error.to_string()))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    use super::*;

    fn member_id(raw: &str) -> MemberId {
        MemberId::new(raw).expect("valid id")
    }

    fn token(member: &str, value: &str) -> RefreshToken {
        RefreshToken::new(member_id(member), value, Utc::now() + Duration::days(7))
            .expect("valid token")
    }

    #[tokio::test]
    async fn test_saved_token_is_found_by_value() {
        let store = InMemoryRefreshTokenStore::new();
        store.save(&token("member-1", "value-a")).await.expect("saved");

        let found = store
            .find_by_token("value-a")
            .await
            .expect("readable")
            .expect("present");
        assert_eq!(found.member_id(), &member_id("member-1"));
        assert_eq!(found.token(), "value-a");
    }

    #[tokio::test]
    async fn test_save_keeps_one_row_per_member() {
        let store = InMemoryRefreshTokenStore::new();
        store.save(&token("member-1", "value-a")).await.expect("saved");
        store.save(&token("member-1", "value-b")).await.expect("saved");

        assert_eq!(store.find_by_token("value-a").await.expect("readable"), None);
        assert!(store
            .find_by_token("value-b")
            .await
            .expect("readable")
            .is_some());
    }

    #[tokio::test]
    async fn test_delete_by_member_id_removes_row() {
        let store = InMemoryRefreshTokenStore::new();
        store.save(&token("member-1", "value-a")).await.expect("saved");

        store
            .delete_by_member_id(&member_id("member-1"))
            .await
            .expect("deleted");

        assert_eq!(store.find_by_token("value-a").await.expect("readable"), None);
    }

    #[tokio::test]
    async fn test_delete_by_value_leaves_other_members_alone() {
        let store = InMemoryRefreshTokenStore::new();
        store.save(&token("member-1", "value-a")).await.expect("saved");
        store.save(&token("member-2", "value-b")).await.expect("saved");

        store.delete("value-a").await.expect("deleted");

        assert_eq!(store.find_by_token("value-a").await.expect("readable"), None);
        assert!(store
            .find_by_token("value-b")
            .await
            .expect("readable")
            .is_some());
    }

    #[tokio::test]
    async fn test_rotate_replaces_value_and_expiry() {
        let store = InMemoryRefreshTokenStore::new();
        store.save(&token("member-1", "value-a")).await.expect("saved");

        let expires_at = Utc::now() + Duration::days(14);
        let rotated = store
            .rotate("value-a", "value-b", expires_at)
            .await
            .expect("rotated");
        assert!(rotated);

        let stored = store
            .find_by_token("value-b")
            .await
            .expect("readable")
            .expect("present");
        assert_eq!(stored.expires_at(), expires_at);
        assert_eq!(store.find_by_token("value-a").await.expect("readable"), None);
    }

    #[tokio::test]
    async fn test_rotate_with_stale_value_loses() {
        let store = InMemoryRefreshTokenStore::new();
        store.save(&token("member-1", "value-a")).await.expect("saved");

        let first = store
            .rotate("value-a", "value-b", Utc::now() + Duration::days(7))
            .await
            .expect("first rotation");
        let second = store
            .rotate("value-a", "value-c", Utc::now() + Duration::days(7))
            .await
            .expect("second rotation");

        assert!(first);
        assert!(!second);
        assert!(store
            .find_by_token("value-b")
            .await
            .expect("readable")
            .is_some());
        assert_eq!(store.find_by_token("value-c").await.expect("readable"), None);
    }
}
