//! Bearer-token minting and verification.
//!
//! DESIGN
//! ======
//! Services depend on the [`TokenProvider`] trait only; tokens are opaque to
//! them and never persisted. The JWT-backed implementation signs HS256
//! claims, and the upstream request layer resolves the acting identity with
//! [`JwtTokenProvider::decode_token`] before calling into the services.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

const DEFAULT_VALIDITY_SECS: i64 = 3600;

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token encoding failed: {0}")]
    Encoding(String),
    #[error("invalid or expired token")]
    Invalid,
}

/// Mints an opaque bearer credential from an identity and role set.
pub trait TokenProvider: Send + Sync {
    /// Create a fresh token for `email` carrying `roles`.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be produced.
    fn create_token(&self, email: &str, roles: &[String]) -> Result<String, TokenError>;
}

/// JWT signing configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub validity_secs: i64,
}

impl JwtConfig {
    #[must_use]
    pub fn new(secret: impl Into<String>, validity_secs: i64) -> Self {
        Self { secret: secret.into(), validity_secs }
    }

    /// Load from `JWT_SECRET` and `JWT_VALIDITY_SECS`.
    /// Returns `None` if the secret is missing (token issuance disabled).
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let secret = std::env::var("JWT_SECRET").ok()?;
        let validity_secs = std::env::var("JWT_VALIDITY_SECS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(DEFAULT_VALIDITY_SECS);
        Some(Self { secret, validity_secs })
    }
}

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Member email.
    pub sub: String,
    pub roles: Vec<String>,
    pub iat: i64,
    pub exp: i64,
}

/// HS256 token provider.
pub struct JwtTokenProvider {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validity_secs: i64,
}

impl JwtTokenProvider {
    #[must_use]
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            validity_secs: config.validity_secs,
        }
    }

    /// Verify a bearer token and return its claims.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Invalid`] for a bad signature, malformed token,
    /// or expired claims.
    pub fn decode_token(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|_| TokenError::Invalid)
    }
}

impl TokenProvider for JwtTokenProvider {
    fn create_token(&self, email: &str, roles: &[String]) -> Result<String, TokenError> {
        let iat = OffsetDateTime::now_utc().unix_timestamp();
        let claims = Claims {
            sub: email.to_owned(),
            roles: roles.to_vec(),
            iat,
            exp: iat + self.validity_secs,
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }
}

#[cfg(test)]
#[path = "token_test.rs"]
mod tests;
