use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Genre fields copied into a movie at write time.
///
/// A snapshot, not a live reference: renaming a genre later does not change
/// movies that already embed it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenreSnapshot {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    #[schema(value_type = GenreSnapshot)]
    pub genre: Json<GenreSnapshot>,
    pub number_in_stock: i32,
    pub daily_rental_rate: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct MovieDto {
    #[validate(length(
        min = 1,
        max = 255,
        message = "title must be between 1 and 255 characters"
    ))]
    pub title: String,
    pub genre_id: Uuid,
    #[validate(range(min = 0, max = 255, message = "number_in_stock must be between 0 and 255"))]
    pub number_in_stock: i32,
    #[validate(range(
        min = 0,
        max = 255,
        message = "daily_rental_rate must be between 0 and 255"
    ))]
    pub daily_rental_rate: i32,
}
