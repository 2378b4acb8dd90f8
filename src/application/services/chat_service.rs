//! Chat Service
//!
//! Connection registry and direct-message rooms. Rooms are addressed by
//! the canonical pair id, so the same two users always land in the same
//! room no matter who initiates.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::application::dto::SendMessageCommand;
use crate::application::error::ApplicationError;
use crate::domain::entities::{
    ChatMessage, ChatRoom, ChatRoomRepository, ChatUser, ChatUserRepository,
};
use crate::domain::value_objects::{RoomId, UserId};
use crate::shared::error::{DomainError, DomainErrorCode};

/// Chat use cases exposed to transport layers.
#[async_trait]
pub trait ChatUseCase: Send + Sync {
    /// Register an active connection for `user_id`.
    async fn join(&self, user_id: UserId, username: &str) -> Result<(), ApplicationError>;

    /// Find the room for this user pair, creating it on first contact.
    async fn get_or_create_room(
        &self,
        first: UserId,
        second: UserId,
    ) -> Result<ChatRoom, ApplicationError>;

    /// Append a message to its room and return the stored message.
    async fn send_message(
        &self,
        command: SendMessageCommand,
    ) -> Result<ChatMessage, ApplicationError>;

    /// Drop the user's active connection.
    async fn leave(&self, user_id: &UserId) -> Result<(), ApplicationError>;
}

/// Default [`ChatUseCase`] implementation over the chat ports.
pub struct ChatCommandService<CR, CU>
where
    CR: ChatRoomRepository,
    CU: ChatUserRepository,
{
    rooms: Arc<CR>,
    users: Arc<CU>,
}

impl<CR, CU> ChatCommandService<CR, CU>
where
    CR: ChatRoomRepository,
    CU: ChatUserRepository,
{
    pub fn new(rooms: Arc<CR>, users: Arc<CU>) -> Self {
        Self { rooms, users }
    }
}

#[async_trait]
impl<CR, CU> ChatUseCase for ChatCommandService<CR, CU>
where
    CR: ChatRoomRepository + 'static,
    CU: ChatUserRepository + 'static,
{
    async fn join(&self, user_id: UserId, username: &str) -> Result<(), ApplicationError> {
        if self.users.find_by_id(&user_id).await?.is_some() {
            return Err(DomainError::new(DomainErrorCode::UserAlreadyConnected)
                .detail("user_id", user_id.as_str())
                .into());
        }

        let user = ChatUser::new(user_id, username)?;
        self.users.save(&user).await?;

        debug!(user_id = %user.id(), "user joined chat");

        Ok(())
    }

    async fn get_or_create_room(
        &self,
        first: UserId,
        second: UserId,
    ) -> Result<ChatRoom, ApplicationError> {
        let room_id = RoomId::of(&first, &second)?;

        if let Some(room) = self.rooms.find_by_id(&room_id).await? {
            return Ok(room);
        }

        let room = ChatRoom::of(first, second)?;
        self.rooms.save(&room).await?;

        debug!(room_id = %room.id(), "chat room created");

        Ok(room)
    }

    async fn send_message(
        &self,
        command: SendMessageCommand,
    ) -> Result<ChatMessage, ApplicationError> {
        let mut room = self
            .rooms
            .find_by_id(&command.room_id)
            .await?
            .ok_or_else(|| {
                ApplicationError::from(
                    DomainError::new(DomainErrorCode::RoomNotFound)
                        .detail("room_id", command.room_id.as_str()),
                )
            })?;

        let message = ChatMessage::new(command.room_id, command.sender_id, command.content);
        room.add_message(message.clone())?;
        self.rooms.save(&room).await?;

        debug!(room_id = %room.id(), message_id = %message.id(), "message stored");

        Ok(message)
    }

    async fn leave(&self, user_id: &UserId) -> Result<(), ApplicationError> {
        self.users.delete(user_id).await?;

        debug!(user_id = %user_id, "user left chat");

        Ok(())
    }
}
