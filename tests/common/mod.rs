use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, Utc};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use cinerent::router::init_router;
use cinerent::state::AppState;
use cinerent_config::{CorsConfig, JwtConfig};
use cinerent_core::password::hash_password;

pub fn setup_test_app(pool: PgPool) -> Router {
    let state = AppState {
        db: pool,
        jwt_config: JwtConfig::default(),
        cors_config: CorsConfig::default(),
    };
    init_router(state)
}

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
}

pub async fn create_test_user(
    pool: &PgPool,
    email: &str,
    password: &str,
    is_admin: bool,
) -> TestUser {
    let hashed = hash_password(password).unwrap();

    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO users (name, email, password, is_admin)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind("Test User")
    .bind(email)
    .bind(&hashed)
    .bind(is_admin)
    .fetch_one(pool)
    .await
    .unwrap();

    TestUser {
        id,
        email: email.to_string(),
        password: password.to_string(),
    }
}

pub async fn get_auth_token(app: Router, email: &str, password: &str) -> String {
    let (status, body) = post_json(
        app,
        "/api/auth",
        None,
        json!({ "email": email, "password": password }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", body);
    body["token"].as_str().unwrap().to_string()
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

#[allow(dead_code)]
pub async fn create_test_genre(pool: &PgPool, name: &str) -> Uuid {
    sqlx::query_scalar("INSERT INTO genres (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_customer(pool: &PgPool, name: &str, phone: &str) -> Uuid {
    sqlx::query_scalar("INSERT INTO customers (name, phone) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(phone)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_movie(
    pool: &PgPool,
    title: &str,
    genre_id: Uuid,
    genre_name: &str,
    number_in_stock: i32,
    daily_rental_rate: i32,
) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO movies (title, genre, number_in_stock, daily_rental_rate)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind(title)
    .bind(json!({ "id": genre_id, "name": genre_name }))
    .bind(number_in_stock)
    .bind(daily_rental_rate)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Inserts an open rental row directly, with an explicit checkout time so
/// fee computations can be pinned down in tests.
#[allow(dead_code)]
pub async fn create_test_rental(
    pool: &PgPool,
    customer_id: Uuid,
    movie_id: Uuid,
    daily_rental_rate: i32,
    date_out: DateTime<Utc>,
) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO rentals (customer, movie, date_out)
         VALUES ($1, $2, $3)
         RETURNING id",
    )
    .bind(json!({ "id": customer_id, "name": "Test Customer", "phone": "555-0100" }))
    .bind(json!({
        "id": movie_id,
        "title": "Test Movie",
        "daily_rental_rate": daily_rental_rate
    }))
    .bind(date_out)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn movie_stock(pool: &PgPool, movie_id: Uuid) -> i32 {
    sqlx::query_scalar("SELECT number_in_stock FROM movies WHERE id = $1")
        .bind(movie_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn request(
    app: Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, body)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    request(app, "GET", uri, None, None).await
}

pub async fn post_json(
    app: Router,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    request(app, "POST", uri, token, Some(body)).await
}

#[allow(dead_code)]
pub async fn put_json(
    app: Router,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    request(app, "PUT", uri, token, Some(body)).await
}

#[allow(dead_code)]
pub async fn delete(
    app: Router,
    uri: &str,
    token: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    request(app, "DELETE", uri, token, None).await
}
