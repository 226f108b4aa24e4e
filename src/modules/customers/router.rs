use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    create_customer, delete_customer, get_customer, get_customers, update_customer,
};

pub fn init_customers_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_customers).post(create_customer))
        .route(
            "/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
}
