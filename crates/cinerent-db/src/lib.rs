//! Database connection pool initialization.
//!
//! The pool is created once at startup from `DATABASE_URL` and injected into
//! the application state; every service call receives an explicit handle
//! rather than reaching for process-wide globals.

use sqlx::PgPool;
use std::env;

/// Initializes the PostgreSQL connection pool from `DATABASE_URL`.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is unset or the connection cannot be
/// established. This runs once during startup, before the server binds.
pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database")
}
