use axum::{Json, extract::State};
use tracing::instrument;

use cinerent_core::AppError;

use crate::middleware::auth::AuthUser;
use crate::modules::rentals::model::Rental;
use crate::modules::returns::model::ReturnDto;
use crate::modules::returns::service::ReturnService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/returns",
    request_body = ReturnDto,
    responses(
        (status = 200, description = "Rental closed, fee computed, stock incremented", body = Rental),
        (status = 400, description = "Validation error, already returned, or malformed token"),
        (status = 401, description = "Missing token"),
        (status = 404, description = "No rental for this customer and movie")
    ),
    tag = "Returns",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _user))]
pub async fn create_return(
    State(state): State<AppState>,
    _user: AuthUser,
    ValidatedJson(dto): ValidatedJson<ReturnDto>,
) -> Result<Json<Rental>, AppError> {
    let rental = ReturnService::return_rental(&state.db, dto.customer_id, dto.movie_id).await?;
    Ok(Json(rental))
}
