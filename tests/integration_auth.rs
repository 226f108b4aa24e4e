mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

use common::{
    create_test_user, generate_unique_email, get_auth_token, post_json, request, setup_test_app,
};

async fn register(
    app: axum::Router,
    name: &str,
    email: &str,
    password: &str,
) -> (StatusCode, Option<String>, serde_json::Value) {
    let req = Request::builder()
        .method("POST")
        .uri("/api/users")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": name,
                "email": email,
                "password": password
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let token = response
        .headers()
        .get("x-auth-token")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, token, body)
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_returns_user_and_token_header(pool: PgPool) {
    let email = generate_unique_email();
    let (status, token, body) = register(
        setup_test_app(pool.clone()),
        "Jane",
        &email,
        "password123",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Jane");
    assert_eq!(body["email"], email);
    assert_eq!(body["is_admin"], false);
    assert!(body.get("password").is_none());

    // The issued token authenticates immediately
    let token = token.expect("x-auth-token header missing");
    let (status, body) = request(
        setup_test_app(pool.clone()),
        "GET",
        "/api/users/me",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], email);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_duplicate_email_is_bad_request(pool: PgPool) {
    let email = generate_unique_email();
    let (status, _, _) = register(
        setup_test_app(pool.clone()),
        "Jane",
        &email,
        "password123",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _, body) = register(
        setup_test_app(pool.clone()),
        "Other Jane",
        &email,
        "password456",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("registered"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_validation(pool: PgPool) {
    // short password
    let (status, _, _) = register(
        setup_test_app(pool.clone()),
        "Jane",
        &generate_unique_email(),
        "short",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // bad email
    let (status, _, _) = register(
        setup_test_app(pool.clone()),
        "Jane",
        "not-an-email",
        "password123",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_issues_token(pool: PgPool) {
    let password = "testpass123";
    let user = create_test_user(&pool, &generate_unique_email(), password, false).await;

    let token = get_auth_token(setup_test_app(pool.clone()), &user.email, password).await;
    assert!(!token.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_with_wrong_password_is_bad_request(pool: PgPool) {
    let user = create_test_user(&pool, &generate_unique_email(), "testpass123", false).await;

    let (status, body) = post_json(
        setup_test_app(pool.clone()),
        "/api/auth",
        None,
        json!({ "email": user.email, "password": "wrong-password" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Invalid email or password"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_with_unknown_email_matches_wrong_password(pool: PgPool) {
    let (status, body) = post_json(
        setup_test_app(pool.clone()),
        "/api/auth",
        None,
        json!({ "email": "nobody@test.com", "password": "whatever1" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Invalid email or password"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_me_requires_token(pool: PgPool) {
    let (status, _) = request(setup_test_app(pool.clone()), "GET", "/api/users/me", None, None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = request(
        setup_test_app(pool.clone()),
        "GET",
        "/api/users/me",
        Some("garbled-token"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
