//! # Domain Layer
//!
//! Core business logic, entities and value objects.
//! No dependencies on outer layers.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
