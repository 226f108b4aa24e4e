use axum::{Router, routing::get, routing::post};

use crate::state::AppState;

use super::controller::{get_me, register_user};

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/", post(register_user))
        .route("/me", get(get_me))
}
