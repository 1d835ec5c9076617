//! Domain errors shared by the auth and favorite services.
//!
//! DESIGN
//! ======
//! Validation failures carry fixed message constants and are distinguished
//! by message, not type: the HTTP layer translates any [`ServiceError`] to a
//! 4xx with the message as the body. All variants are permanent failures
//! raised at the point of detection; nothing here is retryable.

use thiserror::Error;

use crate::store::StoreError;
use crate::token::TokenError;

/// Message for a credential mismatch at login. Deliberately does not say
/// which field was wrong.
pub const INVALID_EMAIL_PASSWORD: &str = "INVALID_EMAIL_PASSWORD";

/// Message for a referenced station id that does not exist.
pub const NOT_FOUND_STATION: &str = "NOT_FOUND_STATION";

/// Message for an operation on a favorite the caller does not own.
pub const INVALID_AUTHENTICATION_INFO: &str = "INVALID_AUTHENTICATION_INFO";

/// Errors surfaced by the domain services.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{}", INVALID_EMAIL_PASSWORD)]
    InvalidEmailPassword,
    #[error("{}", NOT_FOUND_STATION)]
    StationNotFound,
    #[error("{}", INVALID_AUTHENTICATION_INFO)]
    InvalidAuthenticationInfo,
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("token error: {0}")]
    Token(#[from] TokenError),
}
