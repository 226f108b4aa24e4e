//! The rental-return workflow.
//!
//! A rental has exactly two states: open (`date_returned` unset) and
//! returned. The transition is one-way and happens in a single conditional
//! UPDATE, so two concurrent returns of the same rental cannot both close
//! it — the loser sees zero affected rows and reports "already returned".
//!
//! The stock increment that follows is a separate statement. A failure
//! between the two leaves stock under-counted; no compensating action is
//! taken here.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use cinerent_core::AppError;

use crate::modules::rentals::model::Rental;
use crate::modules::rentals::service::RENTAL_COLUMNS;

pub struct ReturnService;

impl ReturnService {
    /// Closes the open rental for the given customer+movie pair, computes
    /// the fee, and restocks the movie.
    #[instrument(skip(db))]
    pub async fn return_rental(
        db: &PgPool,
        customer_id: Uuid,
        movie_id: Uuid,
    ) -> Result<Rental, AppError> {
        // Most recent rental for the pair, open or not: an already-closed
        // one must answer "already returned", not "not found".
        let rental = sqlx::query_as::<_, Rental>(&format!(
            "SELECT {RENTAL_COLUMNS} FROM rentals
             WHERE (customer ->> 'id')::uuid = $1 AND (movie ->> 'id')::uuid = $2
             ORDER BY date_out DESC
             LIMIT 1"
        ))
        .bind(customer_id)
        .bind(movie_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Rental not found")))?;

        if rental.date_returned.is_some() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Rental already returned"
            )));
        }

        let date_returned = Utc::now();
        let fee = rental_fee(
            rental.date_out,
            date_returned,
            rental.movie.daily_rental_rate,
        );

        // Conditional on the rental still being open; the affected-row
        // check closes the race between two simultaneous returns.
        let closed = sqlx::query_as::<_, Rental>(&format!(
            "UPDATE rentals SET date_returned = $2, rental_fee = $3
             WHERE id = $1 AND date_returned IS NULL
             RETURNING {RENTAL_COLUMNS}"
        ))
        .bind(rental.id)
        .bind(date_returned)
        .bind(fee)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::bad_request(anyhow::anyhow!("Rental already returned")))?;

        sqlx::query("UPDATE movies SET number_in_stock = number_in_stock + 1 WHERE id = $1")
            .bind(movie_id)
            .execute(db)
            .await?;

        Ok(closed)
    }
}

/// Fee for a completed rental: billable days times the daily rate frozen in
/// the rental's movie snapshot. Days are counted as the ceiling of the
/// elapsed time in whole days, with a minimum of one billable day — a
/// same-day return still pays for one day.
pub fn rental_fee(date_out: DateTime<Utc>, date_returned: DateTime<Utc>, daily_rate: i32) -> i32 {
    let elapsed_secs = (date_returned - date_out).num_seconds().max(0);
    let days = ((elapsed_secs + 86_399) / 86_400).max(1);
    days as i32 * daily_rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_same_day_return_charges_one_day() {
        let out = Utc::now();
        assert_eq!(rental_fee(out, out + Duration::hours(3), 2), 2);
    }

    #[test]
    fn test_exact_day_boundary_is_not_rounded_up() {
        let out = Utc::now();
        assert_eq!(rental_fee(out, out + Duration::days(2), 2), 4);
    }

    #[test]
    fn test_partial_day_rounds_up() {
        let out = Utc::now();
        assert_eq!(rental_fee(out, out + Duration::hours(60), 2), 6); // 2.5 days -> 3
    }

    #[test]
    fn test_one_second_past_a_full_day_bills_the_next_day() {
        let out = Utc::now();
        let back = out + Duration::days(1) + Duration::seconds(1);
        assert_eq!(rental_fee(out, back, 2), 4);
    }

    #[test]
    fn test_clock_skew_never_charges_negative() {
        let out = Utc::now();
        assert_eq!(rental_fee(out, out - Duration::hours(1), 2), 2);
    }

    #[test]
    fn test_zero_rate_is_free() {
        let out = Utc::now();
        assert_eq!(rental_fee(out, out + Duration::days(7), 0), 0);
    }
}
