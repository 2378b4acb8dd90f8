//! Token Issuing Port
//!
//! Signs and verifies bearer tokens for the session workflows. Access
//! tokens carry the subject and its identity kind; refresh tokens are
//! opaque values the store compares byte for byte.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity kind carried in an access token's claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrincipalKind {
    Member,
    Guest,
}

impl PrincipalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "MEMBER",
            Self::Guest => "GUEST",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "MEMBER" => Some(Self::Member),
            "GUEST" => Some(Self::Guest),
            _ => None,
        }
    }
}

impl fmt::Display for PrincipalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated subject extracted from a valid token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPrincipal {
    pub subject: String,
    pub kind: PrincipalKind,
}

/// Outcome of verifying a presented token.
///
/// Rejection reasons (expired, malformed, bad signature) are logged where
/// they are detected but deliberately collapsed into one `Invalid` case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenVerdict {
    Valid(TokenPrincipal),
    Invalid,
}

/// Failure inside the token signing backend.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TokenError {
    #[error("Token signing failed: {0}")]
    Signing(String),
}

/// Bearer token issuing and verification.
#[cfg_attr(test, mockall::automock)]
pub trait TokenIssuer: Send + Sync {
    /// Short-lived signed access token carrying subject and identity kind.
    fn generate_access_token(
        &self,
        subject: &str,
        kind: PrincipalKind,
    ) -> Result<String, TokenError>;

    /// Long-lived opaque refresh value, unique per call.
    fn generate_refresh_token(&self, subject: &str) -> Result<String, TokenError>;

    /// Verify a presented access token.
    fn validate_token(&self, token: &str) -> TokenVerdict;
}
