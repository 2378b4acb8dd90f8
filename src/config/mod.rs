//! Configuration loading and validation.

mod settings;

pub use settings::{JwtSettings, PolicySettings, Settings, MIN_JWT_SECRET_LENGTH};
