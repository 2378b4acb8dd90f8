//! Token Refresh Service
//!
//! Exchanges a stored refresh token for a fresh pair. The stored row is
//! rotated with a compare-and-swap so each refresh value can be redeemed
//! at most once, even under concurrent requests.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{debug, warn};

use crate::application::dto::TokenResponse;
use crate::application::error::ApplicationError;
use crate::config::JwtSettings;
use crate::domain::entities::{MemberRepository, RefreshTokenStore};
use crate::domain::services::{PrincipalKind, TokenIssuer};

/// Application service for the refresh-token rotation use case.
pub struct TokenRefreshService<M, R, T>
where
    M: MemberRepository,
    R: RefreshTokenStore,
    T: TokenIssuer,
{
    members: Arc<M>,
    refresh_tokens: Arc<R>,
    token_issuer: Arc<T>,
    jwt_settings: JwtSettings,
}

impl<M, R, T> TokenRefreshService<M, R, T>
where
    M: MemberRepository,
    R: RefreshTokenStore,
    T: TokenIssuer,
{
    pub fn new(
        members: Arc<M>,
        refresh_tokens: Arc<R>,
        token_issuer: Arc<T>,
        jwt_settings: JwtSettings,
    ) -> Self {
        Self {
            members,
            refresh_tokens,
            token_issuer,
            jwt_settings,
        }
    }

    /// Redeem `refresh_token` for a fresh access plus refresh pair.
    pub async fn refresh_tokens(
        &self,
        refresh_token: &str,
    ) -> Result<TokenResponse, ApplicationError> {
        let stored = self
            .refresh_tokens
            .find_by_token(refresh_token)
            .await?
            .ok_or(ApplicationError::InvalidRefreshToken)?;

        if stored.is_expired() {
            self.refresh_tokens.delete(refresh_token).await?;
            warn!(member_id = %stored.member_id(), "expired refresh token presented");
            return Err(ApplicationError::InvalidRefreshToken);
        }

        let member = self
            .members
            .find_by_id(stored.member_id())
            .await?
            .ok_or(ApplicationError::InvalidRefreshToken)?;

        let access_token = self
            .token_issuer
            .generate_access_token(member.id().as_str(), PrincipalKind::Member)?;
        let next_value = self
            .token_issuer
            .generate_refresh_token(member.id().as_str())?;
        let expires_at = Utc::now() + Duration::days(self.jwt_settings.refresh_token_expiry_days);

        // Only the caller still holding the current value wins; a
        // concurrent refresh has already rotated it away.
        let rotated = self
            .refresh_tokens
            .rotate(refresh_token, &next_value, expires_at)
            .await?;
        if !rotated {
            warn!(member_id = %member.id(), "refresh token already rotated");
            return Err(ApplicationError::InvalidRefreshToken);
        }

        debug!(member_id = %member.id(), "refresh token rotated");

        Ok(TokenResponse::new(access_token, next_value))
    }
}
