//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! ## Value Objects
//!
//! - **Password / HashedPassword**: raw and hashed credential values
//! - **PasswordStrength**: ordered strength classification
//! - **MemberId / GuestId / UserId / MessageId**: opaque identifiers
//! - **RoomId**: deterministic room identifier derived from a user pair
//! - **ChatText**: length-bounded message body

mod chat_text;
mod id;
mod password;
mod room_id;
mod strength;

pub use chat_text::{ChatText, MAX_MESSAGE_LENGTH};
pub use id::{GuestId, MemberId, MessageId, UserId};
pub use password::{HashedPassword, Password};
pub use room_id::RoomId;
pub use strength::PasswordStrength;
