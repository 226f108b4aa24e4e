use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Customer fields frozen into a rental at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomerSnapshot {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
}

/// Movie fields frozen into a rental at checkout. The daily rate captured
/// here is the one the fee is computed from, even if the movie's rate
/// changes while the rental is out.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MovieSnapshot {
    pub id: Uuid,
    pub title: String,
    pub daily_rental_rate: i32,
}

/// A rental is open while `date_returned` is unset. Closing it sets
/// `date_returned` and `rental_fee` together, exactly once; there is no
/// transition out of the returned state.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Rental {
    pub id: Uuid,
    #[schema(value_type = CustomerSnapshot)]
    pub customer: Json<CustomerSnapshot>,
    #[schema(value_type = MovieSnapshot)]
    pub movie: Json<MovieSnapshot>,
    pub date_out: DateTime<Utc>,
    pub date_returned: Option<DateTime<Utc>>,
    pub rental_fee: Option<i32>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RentalDto {
    pub customer_id: Uuid,
    pub movie_id: Uuid,
}
