//! JWT Token Issuer
//!
//! TokenIssuer implementation signing HS256 access tokens and minting
//! opaque refresh values.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::JwtSettings;
use crate::domain::services::{
    PrincipalKind, TokenError, TokenIssuer, TokenPrincipal, TokenVerdict,
};

/// JWT claims carried by access tokens.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Subject (member or guest id)
    sub: String,
    /// Principal kind discriminator
    #[serde(rename = "type")]
    kind: String,
    /// Issued at (Unix timestamp)
    iat: i64,
    /// Expiration time (Unix timestamp)
    exp: i64,
}

/// HS256 token issuer.
pub struct JwtTokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_expiry: Duration,
}

impl JwtTokenIssuer {
    pub fn new(settings: &JwtSettings) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(settings.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(settings.secret.as_bytes()),
            access_token_expiry: Duration::minutes(settings.access_token_expiry_minutes),
        }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn generate_access_token(
        &self,
        subject: &str,
        kind: PrincipalKind,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            kind: kind.as_str().to_string(),
            iat: now.timestamp(),
            exp: (now + self.access_token_expiry).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    fn generate_refresh_token(&self, subject: &str) -> Result<String, TokenError> {
        // Opaque value with no embedded claims; the token store is the
        // only source of truth for refresh sessions.
        let value = format!("{}.{}", Uuid::new_v4(), Uuid::new_v4());
        debug!(subject, "refresh token generated");
        Ok(value)
    }

    fn validate_token(&self, token: &str) -> TokenVerdict {
        let data = match decode::<Claims>(token, &self.decoding_key, &Validation::default()) {
            Ok(data) => data,
            Err(error) => {
                match error.kind() {
                    ErrorKind::ExpiredSignature => warn!("access token expired"),
                    ErrorKind::InvalidSignature => warn!("access token signature rejected"),
                    ErrorKind::InvalidToken => warn!("access token malformed"),
                    kind => warn!(?kind, "access token rejected"),
                }
                return TokenVerdict::Invalid;
            }
        };

        match PrincipalKind::parse(&data.claims.kind) {
            Some(kind) => TokenVerdict::Valid(TokenPrincipal {
                subject: data.claims.sub,
                kind,
            }),
            None => {
                warn!(kind = %data.claims.kind, "access token carries unknown principal kind");
                TokenVerdict::Invalid
            }
        }
    }
}
