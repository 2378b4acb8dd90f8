//! Chat Message Text

use std::fmt;

use serde::Serialize;

use crate::shared::error::{DomainError, DomainErrorCode};
use crate::shared::guard;

/// Maximum number of characters a single chat message may carry.
pub const MAX_MESSAGE_LENGTH: usize = 4000;

/// Validated body of a chat message: non-blank, at most
/// [`MAX_MESSAGE_LENGTH`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChatText(String);

impl ChatText {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        guard::not_blank(&value, || {
            DomainError::new(DomainErrorCode::ValueCannotBeBlank)
        })?;
        guard::length_between(&value, 1, MAX_MESSAGE_LENGTH, || {
            DomainError::new(DomainErrorCode::MessageTooLong)
                .detail("max_length", MAX_MESSAGE_LENGTH as u64)
                .detail("actual_length", value.chars().count() as u64)
        })?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChatText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
