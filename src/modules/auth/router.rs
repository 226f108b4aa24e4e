use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::login;

pub fn init_auth_router() -> Router<AppState> {
    Router::new().route("/", post(login))
}
