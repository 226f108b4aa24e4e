use sqlx::PgPool;
use sqlx::types::Json;
use tracing::instrument;
use uuid::Uuid;

use cinerent_core::AppError;

use crate::modules::customers::model::Customer;
use crate::modules::movies::model::Movie;

use super::model::{CustomerSnapshot, MovieSnapshot, Rental, RentalDto};

pub(crate) const RENTAL_COLUMNS: &str =
    "id, customer, movie, date_out, date_returned, rental_fee";

pub struct RentalService;

impl RentalService {
    #[instrument(skip(db))]
    pub async fn list(db: &PgPool) -> Result<Vec<Rental>, AppError> {
        let rentals = sqlx::query_as::<_, Rental>(&format!(
            "SELECT {RENTAL_COLUMNS} FROM rentals ORDER BY date_out DESC"
        ))
        .fetch_all(db)
        .await?;

        Ok(rentals)
    }

    #[instrument(skip(db))]
    pub async fn get_by_id(db: &PgPool, id: Uuid) -> Result<Rental, AppError> {
        let rental = sqlx::query_as::<_, Rental>(&format!(
            "SELECT {RENTAL_COLUMNS} FROM rentals WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Rental not found")))?;

        Ok(rental)
    }

    /// Checks a movie out to a customer.
    ///
    /// The stock decrement is conditional on stock being available, so two
    /// concurrent checkouts of the last copy cannot both succeed. Decrement
    /// and insert run in one transaction: when the open-pair index rejects a
    /// duplicate checkout, the decrement rolls back with it and stock is
    /// untouched.
    #[instrument(skip(db))]
    pub async fn create(db: &PgPool, dto: RentalDto) -> Result<Rental, AppError> {
        let customer = sqlx::query_as::<_, Customer>(
            "SELECT id, name, phone, is_gold FROM customers WHERE id = $1",
        )
        .bind(dto.customer_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::bad_request(anyhow::anyhow!("Invalid customer ID")))?;

        let movie = sqlx::query_as::<_, Movie>(
            "SELECT id, title, genre, number_in_stock, daily_rental_rate FROM movies WHERE id = $1",
        )
        .bind(dto.movie_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::bad_request(anyhow::anyhow!("Invalid movie ID")))?;

        let mut tx = db.begin().await?;

        let claimed = sqlx::query(
            "UPDATE movies SET number_in_stock = number_in_stock - 1
             WHERE id = $1 AND number_in_stock > 0",
        )
        .bind(movie.id)
        .execute(&mut *tx)
        .await?;

        if claimed.rows_affected() == 0 {
            return Err(AppError::bad_request(anyhow::anyhow!("Movie not in stock")));
        }

        let rental = sqlx::query_as::<_, Rental>(&format!(
            "INSERT INTO rentals (customer, movie)
             VALUES ($1, $2)
             RETURNING {RENTAL_COLUMNS}"
        ))
        .bind(Json(CustomerSnapshot {
            id: customer.id,
            name: customer.name,
            phone: customer.phone,
        }))
        .bind(Json(MovieSnapshot {
            id: movie.id,
            title: movie.title,
            daily_rental_rate: movie.daily_rental_rate,
        }))
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err)
                if db_err.constraint() == Some("rentals_open_pair_idx") =>
            {
                AppError::bad_request(anyhow::anyhow!(
                    "Customer already has this movie checked out"
                ))
            }
            _ => e.into(),
        })?;

        tx.commit().await?;

        Ok(rental)
    }
}
