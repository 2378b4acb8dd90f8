//! Commands accepted by the application services.
//!
//! Login and registration commands carry raw caller input and are
//! validated by the use case. `SendMessageCommand` carries value objects
//! already validated at the boundary.

use serde::Deserialize;

use crate::domain::value_objects::{ChatText, RoomId, UserId};

/// Request to create a new member account.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterMemberCommand {
    pub username: String,
    pub nickname: String,
    /// Raw password. A missing password is rejected by the credential
    /// policy rather than at the boundary.
    pub password: Option<String>,
}

/// Credentials presented by a returning member.
#[derive(Debug, Clone, Deserialize)]
pub struct MemberLoginCommand {
    pub username: String,
    pub password: String,
}

/// Nickname chosen by an anonymous guest.
#[derive(Debug, Clone, Deserialize)]
pub struct GuestLoginCommand {
    pub nickname: String,
}

/// A message submission for an existing room.
#[derive(Debug, Clone)]
pub struct SendMessageCommand {
    pub room_id: RoomId,
    pub sender_id: UserId,
    pub content: ChatText,
}
