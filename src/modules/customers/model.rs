use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub is_gold: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CustomerDto {
    #[validate(length(
        min = 3,
        max = 50,
        message = "name must be between 3 and 50 characters"
    ))]
    pub name: String,
    #[validate(length(
        min = 3,
        max = 50,
        message = "phone must be between 3 and 50 characters"
    ))]
    pub phone: String,
    #[serde(default)]
    pub is_gold: bool,
}
