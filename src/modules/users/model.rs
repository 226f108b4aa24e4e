use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A user as surfaced by the API.
///
/// The password hash lives only in the `users` table and in the service
/// layer's private login row type; this struct cannot carry it, so no
/// response can leak it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterUserDto {
    #[validate(length(
        min = 1,
        max = 50,
        message = "name must be between 1 and 50 characters"
    ))]
    pub name: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}
