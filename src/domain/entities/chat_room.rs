//! Chat Room Aggregate
//!
//! A direct conversation between exactly two distinct users. The room
//! accepts only messages addressed to it and sent by one of its
//! participants.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::ChatMessage;
use crate::domain::value_objects::{RoomId, UserId};
use crate::shared::error::{DomainError, DomainErrorCode, StoreError};
use crate::shared::guard;

/// A two-person chat room.
#[derive(Debug, Clone)]
pub struct ChatRoom {
    id: RoomId,
    participants: [UserId; 2],
    messages: Vec<ChatMessage>,
    created_at: DateTime<Utc>,
}

impl ChatRoom {
    /// Create the room for an unordered pair of distinct users.
    pub fn of(a: UserId, b: UserId) -> Result<Self, DomainError> {
        let id = RoomId::of(&a, &b)?;

        Ok(Self {
            id,
            participants: [a, b],
            messages: Vec::new(),
            created_at: Utc::now(),
        })
    }

    /// True when `user` is one of the two participants.
    pub fn can_send(&self, user: &UserId) -> bool {
        self.participants.contains(user)
    }

    /// Append a message after checking it targets this room and its sender
    /// participates here.
    pub fn add_message(&mut self, message: ChatMessage) -> Result<(), DomainError> {
        guard::ensure(message.room_id() == &self.id, || {
            DomainError::new(DomainErrorCode::MessageRoomMismatch)
                .detail("room_id", self.id.as_str())
                .detail("message_room_id", message.room_id().as_str())
        })?;
        guard::ensure(self.can_send(message.sender_id()), || {
            DomainError::new(DomainErrorCode::SenderNotParticipant)
                .detail("sender_id", message.sender_id().as_str())
        })?;

        self.messages.push(message);
        Ok(())
    }

    pub fn id(&self) -> &RoomId {
        &self.id
    }

    pub fn participants(&self) -> &[UserId; 2] {
        &self.participants
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Persistence port for chat rooms.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatRoomRepository: Send + Sync {
    async fn find_by_id(&self, id: &RoomId) -> Result<Option<ChatRoom>, StoreError>;

    async fn save(&self, room: &ChatRoom) -> Result<(), StoreError>;
}
