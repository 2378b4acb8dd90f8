//! Password Strength Classification
//!
//! Ordered strength classes with a character-class based classifier. The
//! boundaries (minimum lengths 4 and 8, the four character classes) are a
//! contract shared with the credential policy and must not drift.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Password;
use crate::shared::error::{DomainError, DomainErrorCode};

/// Password strength classes, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// Classify a password.
    ///
    /// Values containing characters outside ASCII alphanumerics and
    /// punctuation are rejected outright, as are values shorter than four
    /// characters.
    pub fn evaluate(password: &Password) -> Result<Self, DomainError> {
        let value = password.as_str();

        if !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c.is_ascii_punctuation())
        {
            return Err(DomainError::new(DomainErrorCode::InvalidPassword));
        }

        let has_letter = value.chars().any(|c| c.is_ascii_alphabetic());
        let has_digit = value.chars().any(|c| c.is_ascii_digit());
        let has_special = value.chars().any(|c| c.is_ascii_punctuation());
        let has_uppercase = value.chars().any(|c| c.is_ascii_uppercase());
        let long_enough = value.len() >= 8;

        if long_enough && has_letter && has_digit && has_special && has_uppercase {
            Ok(Self::Strong)
        } else if long_enough && has_letter && has_digit && has_special {
            Ok(Self::Medium)
        } else if value.len() >= 4 {
            Ok(Self::Weak)
        } else {
            Err(DomainError::new(DomainErrorCode::InvalidPassword))
        }
    }

    /// True when this strength is at least `required`.
    pub fn meets_or_exceeds(&self, required: PasswordStrength) -> bool {
        *self >= required
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn evaluate(raw: &str) -> Result<PasswordStrength, DomainError> {
        PasswordStrength::evaluate(&Password::new(raw).expect("non-blank password"))
    }

    #[test_case("abcd", PasswordStrength::Weak; "four plain letters")]
    #[test_case("1234567", PasswordStrength::Weak; "digits below eight")]
    #[test_case("abcdefgh", PasswordStrength::Weak; "eight letters without digit or special")]
    #[test_case("abcd1234", PasswordStrength::Weak; "letters and digits without special")]
    #[test_case("abcd1234!", PasswordStrength::Medium; "letters digits and special")]
    #[test_case("abc123!", PasswordStrength::Weak; "special mix below eight characters")]
    #[test_case("Abcd1234!", PasswordStrength::Strong; "uppercase letters digits and special")]
    #[test_case("ABCD1234!", PasswordStrength::Strong; "all uppercase letters")]
    fn test_classification(raw: &str, expected: PasswordStrength) {
        assert_eq!(evaluate(raw).expect("classifiable password"), expected);
    }

    #[test_case("abc"; "three characters")]
    #[test_case("ab!"; "short with special")]
    fn test_too_short_is_rejected(raw: &str) {
        let error = evaluate(raw).expect_err("too short");
        assert_eq!(error.code(), DomainErrorCode::InvalidPassword);
    }

    #[test_case("abc d"; "inner space")]
    #[test_case("abcd123 "; "trailing space")]
    #[test_case("abcd1234é"; "non-ascii letter")]
    fn test_characters_outside_classes_are_rejected(raw: &str) {
        let error = evaluate(raw).expect_err("invalid characters");
        assert_eq!(error.code(), DomainErrorCode::InvalidPassword);
    }

    #[test]
    fn test_ordering_is_weak_medium_strong() {
        assert!(PasswordStrength::Weak < PasswordStrength::Medium);
        assert!(PasswordStrength::Medium < PasswordStrength::Strong);
    }

    #[test]
    fn test_meets_or_exceeds_compares_by_rank() {
        assert!(PasswordStrength::Strong.meets_or_exceeds(PasswordStrength::Medium));
        assert!(PasswordStrength::Medium.meets_or_exceeds(PasswordStrength::Medium));
        assert!(!PasswordStrength::Weak.meets_or_exceeds(PasswordStrength::Medium));
        assert!(!PasswordStrength::Medium.meets_or_exceeds(PasswordStrength::Strong));
    }
}
