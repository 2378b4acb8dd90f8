//! Password Hashing Port

use crate::domain::value_objects::{HashedPassword, Password};
use crate::shared::error::DomainError;

/// One-way credential hashing.
///
/// `hash` embeds a random salt, so hashing the same password twice yields
/// different digests that both verify. `matches` never reconstructs the raw
/// password and reports a malformed stored digest as a mismatch.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &Password) -> Result<HashedPassword, DomainError>;

    fn matches(&self, password: &Password, hashed: &HashedPassword) -> bool;
}
