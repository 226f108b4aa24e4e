//! JWT creation and verification.
//!
//! A missing token and a malformed token are different failures with
//! different HTTP mappings: the extractor layer reports a missing header as
//! 401, while [`verify_token`] reports a structurally invalid or
//! badly-signed token as 400. Callers must not collapse the two.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use cinerent_config::JwtConfig;
use cinerent_core::AppError;

use crate::claims::Claims;

/// Creates a signed identity token for the given user.
///
/// # Errors
///
/// Returns a 500-class error if encoding fails (e.g. unusable secret).
pub fn create_token(
    user_id: Uuid,
    name: &str,
    email: &str,
    is_admin: bool,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.token_expiry as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        is_admin,
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

/// Verifies a token and returns its claims.
///
/// # Errors
///
/// Returns a 400 error for any structurally invalid, tampered, or expired
/// token. Absence of a token is the caller's concern, not this function's.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::bad_request(anyhow::anyhow!("Invalid token.")))
}
