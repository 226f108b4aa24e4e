use axum::{Json, extract::State};
use tracing::instrument;

use cinerent_core::AppError;

use crate::middleware::auth::AuthUser;
use crate::middleware::entity_id::EntityId;
use crate::middleware::role::AdminUser;
use crate::modules::movies::model::{Movie, MovieDto};
use crate::modules::movies::service::MovieService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/movies",
    responses((status = 200, description = "All movies", body = Vec<Movie>)),
    tag = "Movies"
)]
#[instrument(skip(state))]
pub async fn get_movies(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, AppError> {
    let movies = MovieService::list(&state.db).await?;
    Ok(Json(movies))
}

#[utoipa::path(
    get,
    path = "/api/movies/{id}",
    params(("id" = Uuid, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Movie details", body = Movie),
        (status = 404, description = "Movie not found or malformed ID")
    ),
    tag = "Movies"
)]
#[instrument(skip(state))]
pub async fn get_movie(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<Movie>, AppError> {
    let movie = MovieService::get_by_id(&state.db, id).await?;
    Ok(Json(movie))
}

#[utoipa::path(
    post,
    path = "/api/movies",
    request_body = MovieDto,
    responses(
        (status = 200, description = "Movie created", body = Movie),
        (status = 400, description = "Validation error, unknown genre ID, or malformed token"),
        (status = 401, description = "Missing token")
    ),
    tag = "Movies",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _user))]
pub async fn create_movie(
    State(state): State<AppState>,
    _user: AuthUser,
    ValidatedJson(dto): ValidatedJson<MovieDto>,
) -> Result<Json<Movie>, AppError> {
    let movie = MovieService::create(&state.db, dto).await?;
    Ok(Json(movie))
}

#[utoipa::path(
    put,
    path = "/api/movies/{id}",
    params(("id" = Uuid, Path, description = "Movie ID")),
    request_body = MovieDto,
    responses(
        (status = 200, description = "Movie updated", body = Movie),
        (status = 400, description = "Validation error, unknown genre ID, or malformed token"),
        (status = 401, description = "Missing token"),
        (status = 404, description = "Movie not found or malformed ID")
    ),
    tag = "Movies",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _user))]
pub async fn update_movie(
    State(state): State<AppState>,
    _user: AuthUser,
    EntityId(id): EntityId,
    ValidatedJson(dto): ValidatedJson<MovieDto>,
) -> Result<Json<Movie>, AppError> {
    let movie = MovieService::update(&state.db, id, dto).await?;
    Ok(Json(movie))
}

#[utoipa::path(
    delete,
    path = "/api/movies/{id}",
    params(("id" = Uuid, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Deleted movie", body = Movie),
        (status = 401, description = "Missing token"),
        (status = 403, description = "Authenticated but not admin"),
        (status = 404, description = "Movie not found or malformed ID")
    ),
    tag = "Movies",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _admin))]
pub async fn delete_movie(
    State(state): State<AppState>,
    _admin: AdminUser,
    EntityId(id): EntityId,
) -> Result<Json<Movie>, AppError> {
    let movie = MovieService::delete(&state.db, id).await?;
    Ok(Json(movie))
}
