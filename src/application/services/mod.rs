//! Application Services
//!
//! Use-case orchestration over the domain ports.

mod auth_service;
mod chat_service;
mod registration_service;
mod token_refresh_service;

pub use auth_service::AuthenticationService;
pub use chat_service::{ChatCommandService, ChatUseCase};
pub use registration_service::MemberRegistrationService;
pub use token_refresh_service::TokenRefreshService;
