//! Credential Policy
//!
//! Registration-time validation of username, nickname and password. The
//! rules run in order and the first violation aborts; nothing is ever
//! aggregated or silently defaulted.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::value_objects::{Password, PasswordStrength};
use crate::shared::error::{DomainError, DomainErrorCode};
use crate::shared::guard;

static USERNAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[a-z0-9]{4,20}$").expect("username pattern is valid"));

/// Rules a raw credential set must satisfy before an identity is created.
pub trait CredentialPolicy: Send + Sync {
    fn check(
        &self,
        username: &str,
        nickname: &str,
        password: Option<&Password>,
    ) -> Result<(), DomainError>;
}

/// Default policy: lowercase alphanumeric usernames, non-blank nicknames,
/// passwords of at least the configured strength.
#[derive(Debug, Clone)]
pub struct StandardCredentialPolicy {
    required_strength: PasswordStrength,
}

impl StandardCredentialPolicy {
    pub fn new(required_strength: PasswordStrength) -> Self {
        Self { required_strength }
    }

    pub fn required_strength(&self) -> PasswordStrength {
        self.required_strength
    }
}

impl Default for StandardCredentialPolicy {
    fn default() -> Self {
        Self::new(PasswordStrength::Medium)
    }
}

impl CredentialPolicy for StandardCredentialPolicy {
    fn check(
        &self,
        username: &str,
        nickname: &str,
        password: Option<&Password>,
    ) -> Result<(), DomainError> {
        guard::not_blank(username, || {
            DomainError::new(DomainErrorCode::UsernameCannotBeBlank)
        })?;
        guard::matches_pattern(username, &USERNAME_PATTERN, || {
            DomainError::new(DomainErrorCode::InvalidUsernameFormat)
                .detail("username", username)
        })?;
        guard::not_blank(nickname, || {
            DomainError::new(DomainErrorCode::NicknameCannotBeBlank)
        })?;

        let password =
            password.ok_or_else(|| DomainError::new(DomainErrorCode::PasswordCannotBeNull))?;
        let strength = password.strength()?;
        guard::ensure(strength.meets_or_exceeds(self.required_strength), || {
            DomainError::new(DomainErrorCode::PasswordTooWeak)
                .detail("required_strength", self.required_strength.as_str())
        })?;

        Ok(())
    }
}
