//! Chat Message Entity

use chrono::{DateTime, Utc};

use crate::domain::value_objects::{ChatText, MessageId, RoomId, UserId};

/// A single message inside a chat room.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    id: MessageId,
    room_id: RoomId,
    sender_id: UserId,
    content: ChatText,
    sent_at: DateTime<Utc>,
}

impl ChatMessage {
    /// New message for `room_id` from `sender_id`, timestamped now.
    pub fn new(room_id: RoomId, sender_id: UserId, content: ChatText) -> Self {
        Self {
            id: MessageId::generate(),
            room_id,
            sender_id,
            content,
            sent_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &MessageId {
        &self.id
    }

    pub fn room_id(&self) -> &RoomId {
        &self.room_id
    }

    pub fn sender_id(&self) -> &UserId {
        &self.sender_id
    }

    pub fn content(&self) -> &ChatText {
        &self.content
    }

    pub fn sent_at(&self) -> DateTime<Utc> {
        self.sent_at
    }
}
