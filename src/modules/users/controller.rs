use axum::response::AppendHeaders;
use axum::{Json, extract::State};
use tracing::instrument;

use cinerent_auth::create_token;
use cinerent_core::AppError;

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::{RegisterUserDto, User};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = RegisterUserDto,
    responses(
        (status = 200, description = "User registered; identity token in the x-auth-token header", body = User),
        (status = 400, description = "Validation error or email already registered")
    ),
    tag = "Users"
)]
#[instrument(skip(state, dto))]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterUserDto>,
) -> Result<(AppendHeaders<[(&'static str, String); 1]>, Json<User>), AppError> {
    let user = UserService::register(&state.db, dto).await?;
    let token = create_token(
        user.id,
        &user.name,
        &user.email,
        user.is_admin,
        &state.jwt_config,
    )?;

    Ok((AppendHeaders([("x-auth-token", token)]), Json(user)))
}

#[utoipa::path(
    get,
    path = "/api/users/me",
    responses(
        (status = 200, description = "The authenticated user, password excluded", body = User),
        (status = 400, description = "Malformed token"),
        (status = 401, description = "Missing token"),
        (status = 404, description = "Token subject no longer exists")
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, user))]
pub async fn get_me(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<User>, AppError> {
    let user = UserService::get_by_id(&state.db, user.user_id()?).await?;
    Ok(Json(user))
}
