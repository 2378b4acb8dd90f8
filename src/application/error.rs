//! Application Errors
//!
//! Failures surfaced by the application services. Domain rule violations
//! pass through unchanged, while infrastructure failures collapse into an
//! internal code so backend details never reach callers.

use thiserror::Error;

use crate::domain::services::TokenError;
use crate::shared::error::{DomainError, StoreError};

/// Errors returned by the application services.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Login rejected. Does not reveal whether the username or the
    /// password was wrong.
    #[error("Invalid username or password")]
    InvalidLoginCredentials,

    /// Refresh rejected: unknown, expired or already rotated token.
    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    /// A domain rule was violated.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A persistence backend failed.
    #[error("Storage failure: {0}")]
    Store(#[from] StoreError),

    /// Token signing failed.
    #[error("Token failure: {0}")]
    Token(#[from] TokenError),
}

impl ApplicationError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &str {
        match self {
            Self::InvalidLoginCredentials => "INVALID_LOGIN_CREDENTIALS",
            Self::InvalidRefreshToken => "INVALID_REFRESH_TOKEN",
            Self::Domain(error) => error.code().as_str(),
            Self::Store(_) | Self::Token(_) => "INTERNAL_ERROR",
        }
    }
}
