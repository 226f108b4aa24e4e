use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ReturnDto {
    pub customer_id: Uuid,
    pub movie_id: Uuid,
}
