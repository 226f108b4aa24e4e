//! Admin authorization extractor.
//!
//! Authorization is layered on top of authentication structurally:
//! [`AdminUser`] runs the [`AuthUser`] extraction itself, so a handler
//! taking `AdminUser` can never see an unauthenticated request.

use axum::{extract::FromRequestParts, http::request::Parts};

use cinerent_core::AppError;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Extractor for admin-only routes.
///
/// Rejects with 401/400 through the inner [`AuthUser`] extraction, and with
/// 403 when the authenticated identity lacks the admin flag.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthUser);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;

        if !auth_user.is_admin() {
            return Err(AppError::forbidden(anyhow::anyhow!("Access denied.")));
        }

        Ok(AdminUser(auth_user))
    }
}
