use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{create_genre, delete_genre, get_genre, get_genres, update_genre};

pub fn init_genres_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_genres).post(create_genre))
        .route(
            "/{id}",
            get(get_genre).put(update_genre).delete(delete_genre),
        )
}
