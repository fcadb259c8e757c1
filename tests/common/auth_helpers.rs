//! Authentication test helpers

use axum::http::StatusCode;
use axum_test::TestServer;

/// Register a user and log them in, returning the bearer token.
pub async fn register_and_login(server: &TestServer, username: &str, password: &str) -> String {
    let response = server
        .post("/api/auth/register")
        .json(&serde_json::json!({
            "username": username,
            "password": password,
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let response = server
        .post("/api/auth/login")
        .json(&serde_json::json!({
            "username": username,
            "password": password,
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    body["token"]
        .as_str()
        .expect("login response carries a token")
        .to_string()
}
