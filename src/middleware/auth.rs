use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use cinerent_auth::{Claims, verify_token};
use cinerent_core::AppError;

use crate::state::AppState;

/// Extractor that validates the JWT and provides the authenticated user's
/// claims.
///
/// A missing `Authorization` header is 401. A header that is present but
/// carries a malformed, tampered, or badly-signed token is 400. The two
/// must stay distinguishable at the HTTP layer.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Get the user ID as UUID
    pub fn user_id(&self) -> Result<uuid::Uuid, AppError> {
        uuid::Uuid::parse_str(&self.0.sub)
            .map_err(|_| AppError::bad_request(anyhow::anyhow!("Invalid user ID in token")))
    }

    pub fn is_admin(&self) -> bool {
        self.0.is_admin
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                AppError::unauthorized(anyhow::anyhow!("Access denied. No token provided."))
            })?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::bad_request(anyhow::anyhow!("Invalid token.")))?;

        let claims = verify_token(token, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}
