use axum::{Json, extract::State};
use tracing::instrument;

use cinerent_core::AppError;

use crate::middleware::auth::AuthUser;
use crate::middleware::entity_id::EntityId;
use crate::middleware::role::AdminUser;
use crate::modules::customers::model::{Customer, CustomerDto};
use crate::modules::customers::service::CustomerService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/customers",
    responses((status = 200, description = "All customers", body = Vec<Customer>)),
    tag = "Customers"
)]
#[instrument(skip(state))]
pub async fn get_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Customer>>, AppError> {
    let customers = CustomerService::list(&state.db).await?;
    Ok(Json(customers))
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    params(("id" = Uuid, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer details", body = Customer),
        (status = 404, description = "Customer not found or malformed ID")
    ),
    tag = "Customers"
)]
#[instrument(skip(state))]
pub async fn get_customer(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<Customer>, AppError> {
    let customer = CustomerService::get_by_id(&state.db, id).await?;
    Ok(Json(customer))
}

#[utoipa::path(
    post,
    path = "/api/customers",
    request_body = CustomerDto,
    responses(
        (status = 200, description = "Customer created", body = Customer),
        (status = 400, description = "Validation error or malformed token"),
        (status = 401, description = "Missing token")
    ),
    tag = "Customers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _user))]
pub async fn create_customer(
    State(state): State<AppState>,
    _user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CustomerDto>,
) -> Result<Json<Customer>, AppError> {
    let customer = CustomerService::create(&state.db, dto).await?;
    Ok(Json(customer))
}

#[utoipa::path(
    put,
    path = "/api/customers/{id}",
    params(("id" = Uuid, Path, description = "Customer ID")),
    request_body = CustomerDto,
    responses(
        (status = 200, description = "Customer updated", body = Customer),
        (status = 400, description = "Validation error or malformed token"),
        (status = 401, description = "Missing token"),
        (status = 404, description = "Customer not found or malformed ID")
    ),
    tag = "Customers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _user))]
pub async fn update_customer(
    State(state): State<AppState>,
    _user: AuthUser,
    EntityId(id): EntityId,
    ValidatedJson(dto): ValidatedJson<CustomerDto>,
) -> Result<Json<Customer>, AppError> {
    let customer = CustomerService::update(&state.db, id, dto).await?;
    Ok(Json(customer))
}

#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    params(("id" = Uuid, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Deleted customer", body = Customer),
        (status = 401, description = "Missing token"),
        (status = 403, description = "Authenticated but not admin"),
        (status = 404, description = "Customer not found or malformed ID")
    ),
    tag = "Customers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _admin))]
pub async fn delete_customer(
    State(state): State<AppState>,
    _admin: AdminUser,
    EntityId(id): EntityId,
) -> Result<Json<Customer>, AppError> {
    let customer = CustomerService::delete(&state.db, id).await?;
    Ok(Json(customer))
}
