//! # Domain Entities
//!
//! Core domain entities and the repository traits that persist them.
//!
//! ## Identity Entities
//!
//! - **Member**: registered identity with hashed credentials
//! - **Guest**: ephemeral identity created at login, no credential
//! - **RefreshToken**: a member's rotating refresh secret
//!
//! ## Chat Entities
//!
//! - **ChatRoom**: two-person room enforcing participant invariants
//! - **ChatMessage**: message bound to a room and sender
//! - **ChatUser**: connected-session record
//!
//! ## Repository Traits
//!
//! Each entity declares its persistence port next to it. The traits are
//! implemented in the infrastructure layer, following the dependency
//! inversion principle.

mod chat_message;
mod chat_room;
mod chat_user;
mod guest;
mod member;
mod refresh_token;

pub use chat_message::ChatMessage;
pub use chat_room::{ChatRoom, ChatRoomRepository};
pub use chat_user::{ChatUser, ChatUserRepository};
pub use guest::{Guest, GuestIdGenerator, GuestRepository};
pub use member::{Member, MemberRepository};
pub use refresh_token::{RefreshToken, RefreshTokenStore};

#[cfg(test)]
pub use chat_room::MockChatRoomRepository;
#[cfg(test)]
pub use chat_user::MockChatUserRepository;
#[cfg(test)]
pub use guest::{MockGuestIdGenerator, MockGuestRepository};
#[cfg(test)]
pub use member::MockMemberRepository;
#[cfg(test)]
pub use refresh_token::MockRefreshTokenStore;
