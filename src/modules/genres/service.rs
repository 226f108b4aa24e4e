use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use cinerent_core::AppError;

use super::model::{Genre, GenreDto};

pub struct GenreService;

impl GenreService {
    /// Genres list sorted by name; the catalogue is browsed alphabetically.
    #[instrument(skip(db))]
    pub async fn list(db: &PgPool) -> Result<Vec<Genre>, AppError> {
        let genres = sqlx::query_as::<_, Genre>("SELECT id, name FROM genres ORDER BY name")
            .fetch_all(db)
            .await?;

        Ok(genres)
    }

    #[instrument(skip(db))]
    pub async fn get_by_id(db: &PgPool, id: Uuid) -> Result<Genre, AppError> {
        let genre = sqlx::query_as::<_, Genre>("SELECT id, name FROM genres WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Genre not found")))?;

        Ok(genre)
    }

    #[instrument(skip(db))]
    pub async fn create(db: &PgPool, dto: GenreDto) -> Result<Genre, AppError> {
        let genre = sqlx::query_as::<_, Genre>(
            "INSERT INTO genres (name) VALUES ($1) RETURNING id, name",
        )
        .bind(&dto.name)
        .fetch_one(db)
        .await?;

        Ok(genre)
    }

    #[instrument(skip(db))]
    pub async fn update(db: &PgPool, id: Uuid, dto: GenreDto) -> Result<Genre, AppError> {
        let genre = sqlx::query_as::<_, Genre>(
            "UPDATE genres SET name = $2 WHERE id = $1 RETURNING id, name",
        )
        .bind(id)
        .bind(&dto.name)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Genre not found")))?;

        Ok(genre)
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<Genre, AppError> {
        let genre = sqlx::query_as::<_, Genre>(
            "DELETE FROM genres WHERE id = $1 RETURNING id, name",
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Genre not found")))?;

        Ok(genre)
    }
}
