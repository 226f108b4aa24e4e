use axum::{Json, extract::State};
use tracing::instrument;

use cinerent_core::AppError;

use crate::middleware::auth::AuthUser;
use crate::middleware::entity_id::EntityId;
use crate::middleware::role::AdminUser;
use crate::modules::genres::model::{Genre, GenreDto};
use crate::modules::genres::service::GenreService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/genres",
    responses(
        (status = 200, description = "All genres sorted by name", body = Vec<Genre>)
    ),
    tag = "Genres"
)]
#[instrument(skip(state))]
pub async fn get_genres(State(state): State<AppState>) -> Result<Json<Vec<Genre>>, AppError> {
    let genres = GenreService::list(&state.db).await?;
    Ok(Json(genres))
}

#[utoipa::path(
    get,
    path = "/api/genres/{id}",
    params(("id" = Uuid, Path, description = "Genre ID")),
    responses(
        (status = 200, description = "Genre details", body = Genre),
        (status = 404, description = "Genre not found or malformed ID")
    ),
    tag = "Genres"
)]
#[instrument(skip(state))]
pub async fn get_genre(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<Genre>, AppError> {
    let genre = GenreService::get_by_id(&state.db, id).await?;
    Ok(Json(genre))
}

#[utoipa::path(
    post,
    path = "/api/genres",
    request_body = GenreDto,
    responses(
        (status = 200, description = "Genre created", body = Genre),
        (status = 400, description = "Validation error or malformed token"),
        (status = 401, description = "Missing token")
    ),
    tag = "Genres",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _user))]
pub async fn create_genre(
    State(state): State<AppState>,
    _user: AuthUser,
    ValidatedJson(dto): ValidatedJson<GenreDto>,
) -> Result<Json<Genre>, AppError> {
    let genre = GenreService::create(&state.db, dto).await?;
    Ok(Json(genre))
}

#[utoipa::path(
    put,
    path = "/api/genres/{id}",
    params(("id" = Uuid, Path, description = "Genre ID")),
    request_body = GenreDto,
    responses(
        (status = 200, description = "Genre updated", body = Genre),
        (status = 400, description = "Validation error or malformed token"),
        (status = 401, description = "Missing token"),
        (status = 404, description = "Genre not found or malformed ID")
    ),
    tag = "Genres",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _user))]
pub async fn update_genre(
    State(state): State<AppState>,
    _user: AuthUser,
    EntityId(id): EntityId,
    ValidatedJson(dto): ValidatedJson<GenreDto>,
) -> Result<Json<Genre>, AppError> {
    let genre = GenreService::update(&state.db, id, dto).await?;
    Ok(Json(genre))
}

#[utoipa::path(
    delete,
    path = "/api/genres/{id}",
    params(("id" = Uuid, Path, description = "Genre ID")),
    responses(
        (status = 200, description = "Deleted genre", body = Genre),
        (status = 401, description = "Missing token"),
        (status = 403, description = "Authenticated but not admin"),
        (status = 404, description = "Genre not found or malformed ID")
    ),
    tag = "Genres",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _admin))]
pub async fn delete_genre(
    State(state): State<AppState>,
    _admin: AdminUser,
    EntityId(id): EntityId,
) -> Result<Json<Genre>, AppError> {
    let genre = GenreService::delete(&state.db, id).await?;
    Ok(Json(genre))
}
