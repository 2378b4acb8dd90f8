//! Authentication Service
//!
//! Issues sessions for members and guests. Member logins never reveal
//! which credential was wrong, and each login replaces the member's
//! stored refresh token so only the newest session can refresh.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{info, warn};

use crate::application::dto::{GuestLoginCommand, MemberLoginCommand, TokenResponse};
use crate::application::error::ApplicationError;
use crate::config::JwtSettings;
use crate::domain::entities::{
    Guest, GuestIdGenerator, GuestRepository, Member, MemberRepository, RefreshToken,
    RefreshTokenStore,
};
use crate::domain::services::{PasswordHasher, PrincipalKind, TokenIssuer};
use crate::domain::value_objects::Password;

/// Application service for member and guest login.
pub struct AuthenticationService<M, G, R, H, T, I>
where
    M: MemberRepository,
    G: GuestRepository,
    R: RefreshTokenStore,
    H: PasswordHasher,
    T: TokenIssuer,
    I: GuestIdGenerator,
{
    members: Arc<M>,
    guests: Arc<G>,
    refresh_tokens: Arc<R>,
    hasher: Arc<H>,
    token_issuer: Arc<T>,
    guest_ids: Arc<I>,
    jwt_settings: JwtSettings,
}

impl<M, G, R, H, T, I> AuthenticationService<M, G, R, H, T, I>
where
    M: MemberRepository,
    G: GuestRepository,
    R: RefreshTokenStore,
    H: PasswordHasher,
    T: TokenIssuer,
    I: GuestIdGenerator,
{
    pub fn new(
        members: Arc<M>,
        guests: Arc<G>,
        refresh_tokens: Arc<R>,
        hasher: Arc<H>,
        token_issuer: Arc<T>,
        guest_ids: Arc<I>,
        jwt_settings: JwtSettings,
    ) -> Self {
        Self {
            members,
            guests,
            refresh_tokens,
            hasher,
            token_issuer,
            guest_ids,
            jwt_settings,
        }
    }

    /// Authenticate a member and issue an access plus refresh token pair.
    pub async fn login_member(
        &self,
        command: MemberLoginCommand,
    ) -> Result<TokenResponse, ApplicationError> {
        let member = self
            .members
            .find_by_username(&command.username)
            .await?
            .ok_or(ApplicationError::InvalidLoginCredentials)?;

        // A malformed password can never match a stored hash, so it
        // collapses into the same rejection as a wrong one.
        let password = Password::new(command.password)
            .map_err(|_| ApplicationError::InvalidLoginCredentials)?;

        if !member.authenticate(&password, self.hasher.as_ref()) {
            warn!(username = %command.username, "member login rejected");
            return Err(ApplicationError::InvalidLoginCredentials);
        }

        let response = self.issue_member_tokens(&member).await?;

        info!(member_id = %member.id(), "member logged in");

        Ok(response)
    }

    /// Admit a guest under a chosen nickname and issue an access token.
    pub async fn login_guest(
        &self,
        command: GuestLoginCommand,
    ) -> Result<TokenResponse, ApplicationError> {
        let guest = Guest::new(self.guest_ids.generate(), &command.nickname)?;
        self.guests.save(&guest).await?;

        let access_token = self
            .token_issuer
            .generate_access_token(guest.id().as_str(), PrincipalKind::Guest)?;

        info!(guest_id = %guest.id(), "guest logged in");

        Ok(TokenResponse::access_only(access_token))
    }

    async fn issue_member_tokens(
        &self,
        member: &Member,
    ) -> Result<TokenResponse, ApplicationError> {
        let access_token = self
            .token_issuer
            .generate_access_token(member.id().as_str(), PrincipalKind::Member)?;
        let refresh_value = self
            .token_issuer
            .generate_refresh_token(member.id().as_str())?;

        let expires_at = Utc::now() + Duration::days(self.jwt_settings.refresh_token_expiry_days);
        let refresh_token = RefreshToken::new(member.id().clone(), &refresh_value, expires_at)?;

        // One stored token per member: logging in again invalidates the
        // previous session's refresh token.
        self.refresh_tokens.delete_by_member_id(member.id()).await?;
        self.refresh_tokens.save(&refresh_token).await?;

        Ok(TokenResponse::new(access_token, refresh_value))
    }
}
