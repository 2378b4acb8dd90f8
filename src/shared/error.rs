//! Domain Error Types
//!
//! Centralized taxonomy for rule violations raised by entities and value
//! objects. Every error carries a stable machine-readable code, a human
//! readable message and optional structured details, so transport layers can
//! translate errors without string matching.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Stable identifier for a domain rule violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainErrorCode {
    InvalidParticipants,
    MessageRoomMismatch,
    SenderNotParticipant,
    RoomNotFound,
    UserAlreadyConnected,
    MessageTooLong,
    ValueCannotBeBlank,
    UsernameCannotBeBlank,
    InvalidUsernameFormat,
    NicknameCannotBeBlank,
    PasswordCannotBeNull,
    PasswordTooWeak,
    InvalidPassword,
    CredentialHashingFailed,
    UsernameOrNicknameAlreadyExists,
}

impl DomainErrorCode {
    /// Machine-readable code, stable across releases.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidParticipants => "INVALID_PARTICIPANTS",
            Self::MessageRoomMismatch => "MESSAGE_ROOM_MISMATCH",
            Self::SenderNotParticipant => "SENDER_NOT_PARTICIPANT",
            Self::RoomNotFound => "ROOM_NOT_FOUND",
            Self::UserAlreadyConnected => "USER_ALREADY_CONNECTED",
            Self::MessageTooLong => "MESSAGE_TOO_LONG",
            Self::ValueCannotBeBlank => "VALUE_CANNOT_BE_BLANK",
            Self::UsernameCannotBeBlank => "USERNAME_CANNOT_BE_BLANK",
            Self::InvalidUsernameFormat => "INVALID_USERNAME_FORMAT",
            Self::NicknameCannotBeBlank => "NICKNAME_CANNOT_BE_BLANK",
            Self::PasswordCannotBeNull => "PASSWORD_CANNOT_BE_NULL",
            Self::PasswordTooWeak => "PASSWORD_TOO_WEAK",
            Self::InvalidPassword => "INVALID_PASSWORD",
            Self::CredentialHashingFailed => "CREDENTIAL_HASHING_FAILED",
            Self::UsernameOrNicknameAlreadyExists => "USERNAME_OR_NICKNAME_ALREADY_EXISTS",
        }
    }

    /// Message used when the raising site does not supply its own.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::InvalidParticipants => "Chat room participants must be two distinct users",
            Self::MessageRoomMismatch => "Message does not belong to this chat room",
            Self::SenderNotParticipant => "Sender is not a participant of this chat room",
            Self::RoomNotFound => "Chat room does not exist",
            Self::UserAlreadyConnected => "User is already connected",
            Self::MessageTooLong => "Message text exceeds the maximum length",
            Self::ValueCannotBeBlank => "Value cannot be blank",
            Self::UsernameCannotBeBlank => "Username cannot be blank",
            Self::InvalidUsernameFormat => {
                "Username must be 4 to 20 characters of lowercase letters and digits"
            }
            Self::NicknameCannotBeBlank => "Nickname cannot be blank",
            Self::PasswordCannotBeNull => "Password is required",
            Self::PasswordTooWeak => "Password does not meet the required strength",
            Self::InvalidPassword => {
                "Password must use only letters, digits and punctuation, with at least 4 characters"
            }
            Self::CredentialHashingFailed => "Credential hashing failed",
            Self::UsernameOrNicknameAlreadyExists => "Username or nickname is already in use",
        }
    }
}

impl fmt::Display for DomainErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured key/value context attached to an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ErrorDetails(BTreeMap<String, Value>);

impl ErrorDetails {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, returning the extended details.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A domain rule violation.
///
/// Raised at the point of detection and never aggregated; the first failing
/// rule aborts the operation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct DomainError {
    code: DomainErrorCode,
    message: Cow<'static, str>,
    details: ErrorDetails,
}

impl DomainError {
    /// Error carrying the code's default message.
    pub fn new(code: DomainErrorCode) -> Self {
        Self {
            code,
            message: Cow::Borrowed(code.default_message()),
            details: ErrorDetails::new(),
        }
    }

    /// Error with a message specific to the raising site.
    pub fn with_message(code: DomainErrorCode, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code,
            message: message.into(),
            details: ErrorDetails::new(),
        }
    }

    /// Attach a structured detail entry.
    pub fn detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details = self.details.with(key, value);
        self
    }

    pub fn code(&self) -> DomainErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> &ErrorDetails {
        &self.details
    }
}

/// Failure inside a persistence adapter.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("Store backend failure: {0}")]
    Backend(String),
}
