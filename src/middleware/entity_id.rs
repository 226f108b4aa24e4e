//! Path-parameter id validation.
//!
//! Every `/:id` route goes through [`EntityId`], which rejects a malformed
//! identifier with 404 before any store access happens. A garbage id can
//! never match a stored entity, so it is reported exactly like an unknown
//! one, and without a store round-trip.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use uuid::Uuid;

use cinerent_core::AppError;

#[derive(Debug, Clone, Copy)]
pub struct EntityId(pub Uuid);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<Uuid>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::not_found(anyhow::anyhow!("Invalid ID.")))?;

        Ok(EntityId(id))
    }
}
