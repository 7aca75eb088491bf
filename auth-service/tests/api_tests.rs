mod common;

use chrono::Duration;
use common::TestApp;
use reqwest::StatusCode;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::spawn().await;

    let response = app.register("alice123", "hunter22").await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["username"], "alice123");
    assert!(body["data"]["id"].is_string());
    assert!(body["data"]["created_at"].is_string());
    // Confirmation only: no token, no hash
    assert!(body["data"].get("token").is_none());
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::spawn().await;

    let first = app.register("alice123", "hunter22").await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app.register("alice123", "different_password").await;
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = second.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("already exists"));
}

#[tokio::test]
async fn test_register_validation_errors_carry_field_details() {
    let app = TestApp::spawn().await;

    let response = app.register("ab", "short").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let details = body["data"]["details"]
        .as_array()
        .expect("Missing validation details");

    let fields: Vec<&str> = details
        .iter()
        .map(|violation| violation["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"username"));
    assert!(fields.contains(&"password"));
}

#[tokio::test]
async fn test_register_rejects_overlong_username() {
    let app = TestApp::spawn().await;

    let response = app.register(&"a".repeat(51), "hunter22").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let details = body["data"]["details"].as_array().unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0]["field"], "username");
}

#[tokio::test]
async fn test_login_success_returns_token() {
    let app = TestApp::spawn().await;

    app.register("alice123", "hunter22").await;

    let response = app.login("alice123", "hunter22").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(!body["data"]["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::spawn().await;

    app.register("alice123", "hunter22").await;

    // Existing user, wrong password
    let wrong_password = app.login("alice123", "wrong_password").await;
    // Unknown user
    let unknown_user = app.login("bob", "wrong_password").await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);

    let first: serde_json::Value = wrong_password.json().await.unwrap();
    let second: serde_json::Value = unknown_user.json().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_protected_requires_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/protected")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_rejects_garbage_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get_authenticated("/protected", "not.a.token")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_protected_rejects_token_from_other_secret() {
    let app = TestApp::spawn().await;

    let foreign = auth::TokenService::new(b"some-other-secret-at-least-32-bytes-long!", Duration::hours(24));
    let token = foreign.issue("user123", "alice123").unwrap();

    let response = app
        .get_authenticated("/protected", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_full_authentication_flow() {
    let app = TestApp::spawn().await;

    let registered = app.register("alice123", "hunter22").await;
    assert_eq!(registered.status(), StatusCode::CREATED);

    let logged_in = app.login("alice123", "hunter22").await;
    assert_eq!(logged_in.status(), StatusCode::OK);
    let body: serde_json::Value = logged_in.json().await.unwrap();
    let token = body["data"]["token"].as_str().unwrap().to_string();

    let response = app
        .get_authenticated("/protected", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("alice123"));
}

#[tokio::test]
async fn test_protected_rejects_expired_token() {
    let app = TestApp::spawn_with_token_ttl(Duration::seconds(1)).await;

    app.register("alice123", "hunter22").await;
    let logged_in = app.login("alice123", "hunter22").await;
    let body: serde_json::Value = logged_in.json().await.unwrap();
    let token = body["data"]["token"].as_str().unwrap().to_string();

    // Wait until the 1-second lifetime has strictly elapsed.
    tokio::time::sleep(std::time::Duration::from_secs(2)).await;

    let response = app
        .get_authenticated("/protected", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/health")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["message"], "Service is healthy");
}
