//! Chat Room Repository Implementation
//!
//! In-memory implementation of the ChatRoomRepository trait, indexed by
//! the canonical room id.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::entities::{ChatRoom, ChatRoomRepository};
use crate::domain::value_objects::RoomId;
use crate::shared::error::StoreError;

/// In-memory chat room repository.
#[derive(Debug, Default)]
pub struct InMemoryChatRoomRepository {
    rows: DashMap<String, ChatRoom>,
}

impl InMemoryChatRoomRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChatRoomRepository for InMemoryChatRoomRepository {
    /// Find a room by its canonical id.
    async fn find_by_id(&self, id: &RoomId) -> Result<Option<ChatRoom>, StoreError> {
        Ok(self.rows.get(id.as_str()).map(|entry| entry.value().clone()))
    }

    /// Insert or replace the room's row.
    async fn save(&self, room: &ChatRoom) -> Result<(), StoreError> {
        self.rows
            .insert(room.id().as_str().to_string(), room.clone());
        Ok(())
    }
}
