//! Application Startup
//!
//! Wires settings, adapters and services into a ready application core.

use std::sync::Arc;

use crate::application::services::{
    AuthenticationService, ChatCommandService, MemberRegistrationService, TokenRefreshService,
};
use crate::config::Settings;
use crate::domain::services::StandardCredentialPolicy;
use crate::infrastructure::persistence::{
    InMemoryChatRoomRepository, InMemoryChatUserRepository, InMemoryGuestRepository,
    InMemoryMemberRepository, InMemoryRefreshTokenStore,
};
use crate::infrastructure::security::{Argon2PasswordHasher, JwtTokenIssuer};
use crate::infrastructure::UuidGuestIdGenerator;

/// Registration service over the default adapter stack.
pub type DefaultRegistrationService = MemberRegistrationService<
    InMemoryMemberRepository,
    StandardCredentialPolicy,
    Argon2PasswordHasher,
>;

/// Authentication service over the default adapter stack.
pub type DefaultAuthenticationService = AuthenticationService<
    InMemoryMemberRepository,
    InMemoryGuestRepository,
    InMemoryRefreshTokenStore,
    Argon2PasswordHasher,
    JwtTokenIssuer,
    UuidGuestIdGenerator,
>;

/// Token refresh service over the default adapter stack.
pub type DefaultTokenRefreshService =
    TokenRefreshService<InMemoryMemberRepository, InMemoryRefreshTokenStore, JwtTokenIssuer>;

/// Chat service over the default adapter stack.
pub type DefaultChatService =
    ChatCommandService<InMemoryChatRoomRepository, InMemoryChatUserRepository>;

/// Wired application core shared by transport layers.
pub struct Application {
    pub registration: DefaultRegistrationService,
    pub authentication: DefaultAuthenticationService,
    pub token_refresh: DefaultTokenRefreshService,
    pub chat: DefaultChatService,
    pub token_issuer: Arc<JwtTokenIssuer>,
    pub settings: Arc<Settings>,
}

impl Application {
    /// Build the application core from settings.
    pub fn build(settings: Settings) -> Self {
        let members = Arc::new(InMemoryMemberRepository::new());
        let guests = Arc::new(InMemoryGuestRepository::new());
        let refresh_tokens = Arc::new(InMemoryRefreshTokenStore::new());
        let rooms = Arc::new(InMemoryChatRoomRepository::new());
        let chat_users = Arc::new(InMemoryChatUserRepository::new());

        let policy = Arc::new(StandardCredentialPolicy::new(
            settings.policy.required_password_strength,
        ));
        let hasher = Arc::new(Argon2PasswordHasher::new());
        let token_issuer = Arc::new(JwtTokenIssuer::new(&settings.jwt));
        let guest_ids = Arc::new(UuidGuestIdGenerator::new());

        let registration = MemberRegistrationService::new(
            Arc::clone(&members),
            Arc::clone(&policy),
            Arc::clone(&hasher),
        );
        let authentication = AuthenticationService::new(
            Arc::clone(&members),
            Arc::clone(&guests),
            Arc::clone(&refresh_tokens),
            Arc::clone(&hasher),
            Arc::clone(&token_issuer),
            Arc::clone(&guest_ids),
            settings.jwt.clone(),
        );
        let token_refresh = TokenRefreshService::new(
            Arc::clone(&members),
            Arc::clone(&refresh_tokens),
            Arc::clone(&token_issuer),
            settings.jwt.clone(),
        );
        let chat = ChatCommandService::new(Arc::clone(&rooms), Arc::clone(&chat_users));

        let settings = Arc::new(settings);
        tracing::info!(environment = %settings.environment, "application core wired");

        Self {
            registration,
            authentication,
            token_refresh,
            chat,
            token_issuer,
            settings,
        }
    }
}
