//! Data transfer objects crossing the application boundary.

mod command;
mod response;

pub use command::{
    GuestLoginCommand, MemberLoginCommand, RegisterMemberCommand, SendMessageCommand,
};
pub use response::TokenResponse;
