mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use common::{
    create_test_user, delete, generate_unique_email, get, get_auth_token, post_json, put_json,
    setup_test_app,
};

async fn member_token(pool: &PgPool) -> String {
    let password = "testpass123";
    let user = create_test_user(pool, &generate_unique_email(), password, false).await;
    get_auth_token(setup_test_app(pool.clone()), &user.email, password).await
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_fetch_customer(pool: PgPool) {
    let token = member_token(&pool).await;

    let (status, body) = post_json(
        setup_test_app(pool.clone()),
        "/api/customers",
        Some(&token),
        json!({ "name": "Bea", "phone": "555-0101" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Bea");
    assert_eq!(body["is_gold"], false);
    let id = body["id"].as_str().unwrap().to_string();

    let (status, body) = get(
        setup_test_app(pool.clone()),
        &format!("/api/customers/{}", id),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["phone"], "555-0101");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_customer_requires_token(pool: PgPool) {
    let (status, _) = post_json(
        setup_test_app(pool.clone()),
        "/api/customers",
        None,
        json!({ "name": "Bea", "phone": "555-0101" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_customer_validation(pool: PgPool) {
    let token = member_token(&pool).await;

    // name too short
    let (status, _) = post_json(
        setup_test_app(pool.clone()),
        "/api/customers",
        Some(&token),
        json!({ "name": "Al", "phone": "555-0101" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // phone missing
    let (status, body) = post_json(
        setup_test_app(pool.clone()),
        "/api/customers",
        Some(&token),
        json!({ "name": "Alice" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("phone"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_is_a_full_replace(pool: PgPool) {
    let token = member_token(&pool).await;

    let (_, body) = post_json(
        setup_test_app(pool.clone()),
        "/api/customers",
        Some(&token),
        json!({ "name": "Bea", "phone": "555-0101", "is_gold": true }),
    )
    .await;
    let id = body["id"].as_str().unwrap().to_string();

    // is_gold omitted on update falls back to the default
    let (status, body) = put_json(
        setup_test_app(pool.clone()),
        &format!("/api/customers/{}", id),
        Some(&token),
        json!({ "name": "Beatrice", "phone": "555-0202" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Beatrice");
    assert_eq!(body["is_gold"], false);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_customer_requires_admin(pool: PgPool) {
    let password = "testpass123";
    let member = create_test_user(&pool, &generate_unique_email(), password, false).await;
    let admin = create_test_user(&pool, &generate_unique_email(), password, true).await;
    let member_token =
        get_auth_token(setup_test_app(pool.clone()), &member.email, password).await;
    let admin_token = get_auth_token(setup_test_app(pool.clone()), &admin.email, password).await;

    let (_, body) = post_json(
        setup_test_app(pool.clone()),
        "/api/customers",
        Some(&member_token),
        json!({ "name": "Bea", "phone": "555-0101" }),
    )
    .await;
    let id = body["id"].as_str().unwrap().to_string();

    let (status, _) = delete(
        setup_test_app(pool.clone()),
        &format!("/api/customers/{}", id),
        Some(&member_token),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = delete(
        setup_test_app(pool.clone()),
        &format!("/api/customers/{}", id),
        Some(&admin_token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Bea");
}
