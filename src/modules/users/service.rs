use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use cinerent_core::AppError;
use cinerent_core::password::hash_password;

use super::model::{RegisterUserDto, User};

pub struct UserService;

impl UserService {
    #[instrument(skip(db, dto))]
    pub async fn register(db: &PgPool, dto: RegisterUserDto) -> Result<User, AppError> {
        let existing = sqlx::query_as::<_, User>(
            "SELECT id, name, email, is_admin FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await?;

        if existing.is_some() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "User already registered."
            )));
        }

        let hashed_password = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password)
             VALUES ($1, $2, $3)
             RETURNING id, name, email, is_admin",
        )
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&hashed_password)
        .fetch_one(db)
        .await?;

        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn get_by_id(db: &PgPool, id: Uuid) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, is_admin FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

        Ok(user)
    }
}
