//! # Infrastructure Layer
//!
//! Adapters implementing the domain ports: persistence, security and id
//! generation.

mod generator;
pub mod persistence;
pub mod security;

pub use generator::UuidGuestIdGenerator;
