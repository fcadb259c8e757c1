//! Authentication API integration tests
//!
//! End-to-end tests for registration and login over HTTP.

mod common;

use axum::http::StatusCode;
use common::auth_helpers::register_and_login;
use common::spawn_app;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn register_succeeds_then_rejects_duplicate_username() {
    let app = spawn_app().await;
    let body = serde_json::json!({ "username": "alice", "password": "password123" });

    let first = app.server.post("/api/auth/register").json(&body).await;
    assert_eq!(first.status_code(), StatusCode::CREATED);
    let first_body: serde_json::Value = first.json();
    assert_eq!(first_body["message"], "User registered successfully");

    let second = app.server.post("/api/auth/register").json(&body).await;
    assert_eq!(second.status_code(), StatusCode::BAD_REQUEST);
    let second_body: serde_json::Value = second.json();
    assert_eq!(second_body["message"], "Username already taken");
}

#[tokio::test]
async fn register_stores_hash_not_clear_text() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/api/auth/register")
        .json(&serde_json::json!({ "username": "alice", "password": "password123" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let stored: String =
        sqlx::query_scalar("SELECT password_hash FROM users WHERE username = ?")
            .bind("alice")
            .fetch_one(&app.pool)
            .await
            .unwrap();

    assert_ne!(stored, "password123");
    assert!(bcrypt::verify("password123", &stored).unwrap());
}

#[tokio::test]
async fn login_returns_token_for_valid_credentials() {
    let app = spawn_app().await;

    app.server
        .post("/api/auth/register")
        .json(&serde_json::json!({ "username": "alice", "password": "password123" }))
        .await;

    let response = app
        .server
        .post("/api/auth/login")
        .json(&serde_json::json!({ "username": "alice", "password": "password123" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Login successful");
    assert!(!body["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let app = spawn_app().await;

    app.server
        .post("/api/auth/register")
        .json(&serde_json::json!({ "username": "alice", "password": "password123" }))
        .await;

    let wrong_password = app
        .server
        .post("/api/auth/login")
        .json(&serde_json::json!({ "username": "alice", "password": "hunter2" }))
        .await;
    let unknown_user = app
        .server
        .post("/api/auth/login")
        .json(&serde_json::json!({ "username": "mallory", "password": "password123" }))
        .await;

    assert_eq!(wrong_password.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(unknown_user.status_code(), StatusCode::BAD_REQUEST);
    // Identical bodies, so the endpoint does not reveal which usernames exist.
    assert_eq!(wrong_password.text(), unknown_user.text());
}

#[tokio::test]
async fn usernames_are_case_sensitive() {
    let app = spawn_app().await;

    register_and_login(&app.server, "alice", "password123").await;

    // A different casing is a different (unknown) user.
    let response = app
        .server
        .post("/api/auth/login")
        .json(&serde_json::json!({ "username": "Alice", "password": "password123" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
