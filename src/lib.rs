//! # Chat Core Library
//!
//! This crate provides the identity, credential and session core for a
//! lightweight chat backend:
//! - Member registration with credential policy enforcement
//! - Member and guest login with JWT access tokens
//! - Refresh token rotation with at-most-once redemption
//! - Direct-message rooms with participant checks
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Core business entities, value objects and ports
//! - **Application Layer**: Use-case services, commands and responses
//! - **Infrastructure Layer**: Argon2, JWT and in-memory store adapters
//!
//! ## Module Structure
//!
//! ```text
//! chat_core/
//! +-- config/        Configuration management
//! +-- domain/        Domain entities, value objects, and ports
//! +-- application/   Application services and DTOs
//! +-- infrastructure/ Hashing, token and store implementations
//! +-- shared/        Common utilities (errors, guards)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
