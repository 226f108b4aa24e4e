use axum::{Json, extract::State};
use tracing::instrument;

use cinerent_core::AppError;

use crate::middleware::auth::AuthUser;
use crate::middleware::entity_id::EntityId;
use crate::modules::rentals::model::{Rental, RentalDto};
use crate::modules::rentals::service::RentalService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/rentals",
    responses((status = 200, description = "All rentals, newest checkout first", body = Vec<Rental>)),
    tag = "Rentals"
)]
#[instrument(skip(state))]
pub async fn get_rentals(State(state): State<AppState>) -> Result<Json<Vec<Rental>>, AppError> {
    let rentals = RentalService::list(&state.db).await?;
    Ok(Json(rentals))
}

#[utoipa::path(
    get,
    path = "/api/rentals/{id}",
    params(("id" = Uuid, Path, description = "Rental ID")),
    responses(
        (status = 200, description = "Rental details", body = Rental),
        (status = 404, description = "Rental not found or malformed ID")
    ),
    tag = "Rentals"
)]
#[instrument(skip(state))]
pub async fn get_rental(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<Rental>, AppError> {
    let rental = RentalService::get_by_id(&state.db, id).await?;
    Ok(Json(rental))
}

#[utoipa::path(
    post,
    path = "/api/rentals",
    request_body = RentalDto,
    responses(
        (status = 200, description = "Rental created, stock decremented", body = Rental),
        (status = 400, description = "Unknown customer/movie ID, movie out of stock, or malformed token"),
        (status = 401, description = "Missing token")
    ),
    tag = "Rentals",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _user))]
pub async fn create_rental(
    State(state): State<AppState>,
    _user: AuthUser,
    ValidatedJson(dto): ValidatedJson<RentalDto>,
) -> Result<Json<Rental>, AppError> {
    let rental = RentalService::create(&state.db, dto).await?;
    Ok(Json(rental))
}
