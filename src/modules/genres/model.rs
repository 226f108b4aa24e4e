use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Genre {
    pub id: Uuid,
    pub name: String,
}

/// DTO for creating or fully replacing a genre.
///
/// The name floor is 5 everywhere; the create and update paths share this
/// DTO so the bounds cannot drift apart.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GenreDto {
    #[validate(length(
        min = 5,
        max = 50,
        message = "name must be between 5 and 50 characters"
    ))]
    pub name: String,
}
