//! Responses returned by the application services.

use serde::Serialize;

/// Bearer tokens issued after a successful login or refresh.
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Absent for guest sessions, which cannot be refreshed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl TokenResponse {
    /// Access plus refresh pair for a member session.
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token: Some(refresh_token),
        }
    }

    /// Access token only, for guest sessions.
    pub fn access_only(access_token: String) -> Self {
        Self {
            access_token,
            refresh_token: None,
        }
    }
}
