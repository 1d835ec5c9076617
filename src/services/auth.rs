//! Login service — credential verification and token issuance.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::store::{MemberStore, StoreError};
use crate::token::TokenProvider;

/// Login request payload.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response carrying the bearer token.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
}

/// Verifies a login request against the member store and issues a token.
///
/// Stateless; every call is a fresh lookup plus a token mint.
pub struct AuthService {
    members: Arc<dyn MemberStore>,
    tokens: Arc<dyn TokenProvider>,
}

impl AuthService {
    #[must_use]
    pub fn new(members: Arc<dyn MemberStore>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self { members, tokens }
    }

    /// Verify credentials and issue a bearer token for the member.
    ///
    /// The mismatch message never says which field was wrong.
    ///
    /// # Errors
    ///
    /// Fails with the fixed invalid-credentials message on a password
    /// mismatch; an unknown email surfaces the member store's not-found
    /// error untouched.
    pub async fn login(&self, request: &TokenRequest) -> Result<TokenResponse, ServiceError> {
        let member = self
            .members
            .find_by_email(&request.email)
            .await?
            .ok_or(StoreError::NotFound)?;

        if member.password != request.password {
            return Err(ServiceError::InvalidEmailPassword);
        }

        let access_token = self.tokens.create_token(&member.email, &member.roles)?;
        tracing::debug!(email = %member.email, "issued access token");
        Ok(TokenResponse { access_token })
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
