//! # Application Layer
//!
//! Use cases, commands and responses. Talks to the outside world only
//! through the domain ports.

pub mod dto;
pub mod error;
pub mod services;

pub use error::ApplicationError;
