use sqlx::PgPool;
use sqlx::types::Json;
use tracing::instrument;
use uuid::Uuid;

use cinerent_core::AppError;

use crate::modules::genres::model::Genre;

use super::model::{GenreSnapshot, Movie, MovieDto};

const MOVIE_COLUMNS: &str = "id, title, genre, number_in_stock, daily_rental_rate";

pub struct MovieService;

impl MovieService {
    #[instrument(skip(db))]
    pub async fn list(db: &PgPool) -> Result<Vec<Movie>, AppError> {
        let movies = sqlx::query_as::<_, Movie>(&format!("SELECT {MOVIE_COLUMNS} FROM movies"))
            .fetch_all(db)
            .await?;

        Ok(movies)
    }

    #[instrument(skip(db))]
    pub async fn get_by_id(db: &PgPool, id: Uuid) -> Result<Movie, AppError> {
        let movie =
            sqlx::query_as::<_, Movie>(&format!("SELECT {MOVIE_COLUMNS} FROM movies WHERE id = $1"))
                .bind(id)
                .fetch_optional(db)
                .await?
                .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Movie not found")))?;

        Ok(movie)
    }

    #[instrument(skip(db))]
    pub async fn create(db: &PgPool, dto: MovieDto) -> Result<Movie, AppError> {
        let genre = Self::resolve_genre(db, dto.genre_id).await?;

        let movie = sqlx::query_as::<_, Movie>(&format!(
            "INSERT INTO movies (title, genre, number_in_stock, daily_rental_rate)
             VALUES ($1, $2, $3, $4)
             RETURNING {MOVIE_COLUMNS}"
        ))
        .bind(&dto.title)
        .bind(Json(&genre))
        .bind(dto.number_in_stock)
        .bind(dto.daily_rental_rate)
        .fetch_one(db)
        .await?;

        Ok(movie)
    }

    /// Full replace; the genre snapshot is re-taken from the submitted
    /// genre_id, so an update refreshes the embedded copy.
    #[instrument(skip(db))]
    pub async fn update(db: &PgPool, id: Uuid, dto: MovieDto) -> Result<Movie, AppError> {
        let genre = Self::resolve_genre(db, dto.genre_id).await?;

        let movie = sqlx::query_as::<_, Movie>(&format!(
            "UPDATE movies SET title = $2, genre = $3, number_in_stock = $4, daily_rental_rate = $5
             WHERE id = $1
             RETURNING {MOVIE_COLUMNS}"
        ))
        .bind(id)
        .bind(&dto.title)
        .bind(Json(&genre))
        .bind(dto.number_in_stock)
        .bind(dto.daily_rental_rate)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Movie not found")))?;

        Ok(movie)
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<Movie, AppError> {
        let movie = sqlx::query_as::<_, Movie>(&format!(
            "DELETE FROM movies WHERE id = $1 RETURNING {MOVIE_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Movie not found")))?;

        Ok(movie)
    }

    /// A bad genre id in the body is a validation-class failure (400), not
    /// a 404: the movie route exists, the payload is wrong.
    async fn resolve_genre(db: &PgPool, genre_id: Uuid) -> Result<GenreSnapshot, AppError> {
        let genre = sqlx::query_as::<_, Genre>("SELECT id, name FROM genres WHERE id = $1")
            .bind(genre_id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::bad_request(anyhow::anyhow!("Invalid genre ID")))?;

        Ok(GenreSnapshot {
            id: genre.id,
            name: genre.name,
        })
    }
}
