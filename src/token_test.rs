use super::*;

use std::sync::Mutex;

const SECRET: &str = "test-secret";
const EMAIL: &str = "admin@email.com";

fn admin_roles() -> Vec<String> {
    vec!["ROLE_ADMIN".to_owned()]
}

fn provider() -> JwtTokenProvider {
    JwtTokenProvider::new(&JwtConfig::new(SECRET, 3600))
}

// =============================================================================
// MINT / VERIFY
// =============================================================================

#[test]
fn create_token_returns_non_blank_string() {
    let token = provider()
        .create_token(EMAIL, &admin_roles())
        .expect("token creation should succeed");
    assert!(!token.trim().is_empty());
}

#[test]
fn decode_recovers_subject_and_roles() {
    let provider = provider();
    let token = provider
        .create_token(EMAIL, &admin_roles())
        .expect("token creation should succeed");

    let claims = provider.decode_token(&token).expect("decode should succeed");
    assert_eq!(claims.sub, EMAIL);
    assert_eq!(claims.roles, admin_roles());
    assert!(claims.exp > claims.iat);
}

#[test]
fn decode_rejects_token_signed_with_other_secret() {
    let other = JwtTokenProvider::new(&JwtConfig::new("other-secret", 3600));
    let token = other
        .create_token(EMAIL, &admin_roles())
        .expect("token creation should succeed");

    let result = provider().decode_token(&token);
    assert!(matches!(result, Err(TokenError::Invalid)));
}

#[test]
fn decode_rejects_expired_token() {
    let expired = JwtTokenProvider::new(&JwtConfig::new(SECRET, -120));
    let token = expired
        .create_token(EMAIL, &admin_roles())
        .expect("token creation should succeed");

    let result = expired.decode_token(&token);
    assert!(matches!(result, Err(TokenError::Invalid)));
}

#[test]
fn decode_rejects_garbage_input() {
    let result = provider().decode_token("not-a-token");
    assert!(matches!(result, Err(TokenError::Invalid)));
}

// =============================================================================
// JwtConfig::from_env — env manipulation requires unsafe in edition 2024.
// A process-wide lock serializes these tests against each other.
// =============================================================================

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// # Safety
/// Caller must hold `ENV_LOCK` so no other test touches these vars.
unsafe fn clear_jwt_env() {
    unsafe {
        std::env::remove_var("JWT_SECRET");
        std::env::remove_var("JWT_VALIDITY_SECS");
    }
}

#[test]
fn from_env_with_secret_uses_default_validity() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        clear_jwt_env();
        std::env::set_var("JWT_SECRET", "s3cret");
    }
    let config = JwtConfig::from_env().expect("config should load");
    assert_eq!(config.secret, "s3cret");
    assert_eq!(config.validity_secs, 3600);
    unsafe { clear_jwt_env() };
}

#[test]
fn from_env_missing_secret_returns_none() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe { clear_jwt_env() };
    assert!(JwtConfig::from_env().is_none());
}

#[test]
fn from_env_reads_custom_validity() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        clear_jwt_env();
        std::env::set_var("JWT_SECRET", "s3cret");
        std::env::set_var("JWT_VALIDITY_SECS", "120");
    }
    let config = JwtConfig::from_env().expect("config should load");
    assert_eq!(config.validity_secs, 120);
    unsafe { clear_jwt_env() };
}

#[test]
fn from_env_ignores_unparseable_validity() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        clear_jwt_env();
        std::env::set_var("JWT_SECRET", "s3cret");
        std::env::set_var("JWT_VALIDITY_SECS", "soon");
    }
    let config = JwtConfig::from_env().expect("config should load");
    assert_eq!(config.validity_secs, 3600);
    unsafe { clear_jwt_env() };
}
