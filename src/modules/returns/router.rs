use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::create_return;

pub fn init_returns_router() -> Router<AppState> {
    Router::new().route("/", post(create_return))
}
