//! In-memory persistence adapters.
//!
//! Process-local stores behind the domain repository ports, suitable for
//! tests and single-node deployments. A database-backed implementation
//! can replace them without touching the application layer.

mod chat_room_repository;
mod chat_user_repository;
mod guest_repository;
mod member_repository;
mod refresh_token_store;

pub use chat_room_repository::InMemoryChatRoomRepository;
pub use chat_user_repository::InMemoryChatUserRepository;
pub use guest_repository::InMemoryGuestRepository;
pub use member_repository::InMemoryMemberRepository;
pub use refresh_token_store::InMemoryRefreshTokenStore;
