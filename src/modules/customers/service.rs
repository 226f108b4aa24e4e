use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use cinerent_core::AppError;

use super::model::{Customer, CustomerDto};

pub struct CustomerService;

impl CustomerService {
    #[instrument(skip(db))]
    pub async fn list(db: &PgPool) -> Result<Vec<Customer>, AppError> {
        let customers =
            sqlx::query_as::<_, Customer>("SELECT id, name, phone, is_gold FROM customers")
                .fetch_all(db)
                .await?;

        Ok(customers)
    }

    #[instrument(skip(db))]
    pub async fn get_by_id(db: &PgPool, id: Uuid) -> Result<Customer, AppError> {
        let customer = sqlx::query_as::<_, Customer>(
            "SELECT id, name, phone, is_gold FROM customers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Customer not found")))?;

        Ok(customer)
    }

    #[instrument(skip(db))]
    pub async fn create(db: &PgPool, dto: CustomerDto) -> Result<Customer, AppError> {
        let customer = sqlx::query_as::<_, Customer>(
            "INSERT INTO customers (name, phone, is_gold)
             VALUES ($1, $2, $3)
             RETURNING id, name, phone, is_gold",
        )
        .bind(&dto.name)
        .bind(&dto.phone)
        .bind(dto.is_gold)
        .fetch_one(db)
        .await?;

        Ok(customer)
    }

    /// Full replace of the mutable fields; returns the post-update row.
    #[instrument(skip(db))]
    pub async fn update(db: &PgPool, id: Uuid, dto: CustomerDto) -> Result<Customer, AppError> {
        let customer = sqlx::query_as::<_, Customer>(
            "UPDATE customers SET name = $2, phone = $3, is_gold = $4
             WHERE id = $1
             RETURNING id, name, phone, is_gold",
        )
        .bind(id)
        .bind(&dto.name)
        .bind(&dto.phone)
        .bind(dto.is_gold)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Customer not found")))?;

        Ok(customer)
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<Customer, AppError> {
        let customer = sqlx::query_as::<_, Customer>(
            "DELETE FROM customers WHERE id = $1 RETURNING id, name, phone, is_gold",
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Customer not found")))?;

        Ok(customer)
    }
}
