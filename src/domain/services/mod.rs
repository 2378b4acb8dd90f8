//! # Domain Services
//!
//! Domain-level rules and ports that do not belong to a single entity.
//!
//! - **CredentialPolicy**: registration-time credential validation
//! - **PasswordHasher**: one-way hashing port
//! - **TokenIssuer**: bearer token signing and verification port

mod credential_policy;
mod password_hasher;
mod token_issuer;

pub use credential_policy::{CredentialPolicy, StandardCredentialPolicy};
pub use password_hasher::PasswordHasher;
pub use token_issuer::{PrincipalKind, TokenError, TokenIssuer, TokenPrincipal, TokenVerdict};

#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
#[cfg(test)]
pub use token_issuer::MockTokenIssuer;
