//! Common Test Utilities
//!
//! Shared helpers and fixtures for the integration tests.

use chat_core::config::{JwtSettings, PolicySettings, Settings};
use chat_core::domain::value_objects::PasswordStrength;
use chat_core::startup::Application;

/// Build an application core over fresh in-memory stores.
pub fn test_application() -> Application {
    Application::build(test_settings())
}

/// Settings used by the integration tests.
pub fn test_settings() -> Settings {
    Settings {
        jwt: JwtSettings {
            secret: "integration-test-secret-0123456789abcdef".to_string(),
            access_token_expiry_minutes: 15,
            refresh_token_expiry_days: 7,
        },
        policy: PolicySettings {
            required_password_strength: PasswordStrength::Medium,
        },
        environment: "test".to_string(),
    }
}

/// Generate a unique username within the allowed charset.
pub fn unique_username() -> String {
    format!("user{}", &uuid::Uuid::new_v4().simple().to_string()[..12])
}

/// Password satisfying the default medium policy.
pub const TEST_PASSWORD: &str = "abcd1234!";
