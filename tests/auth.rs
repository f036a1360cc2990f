mod common;

use axum::http::{header, Method, StatusCode};
use serde_json::json;

use common::{access_of, TestApp, USER_PASSWORD};

#[tokio::test]
async fn register_returns_user_without_password() {
    let app = TestApp::new().await;

    let res = app
        .post(
            "/api/v1/register",
            None,
            json!({ "username": "alice", "password": "hunter2-secret", "email": "alice@example.com" }),
        )
        .await;

    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.data()["username"], "alice");
    assert_eq!(res.data()["email"], "alice@example.com");
    assert_eq!(res.data()["role"], "regular");
    let raw = res.body.to_string();
    assert!(!raw.contains("hunter2-secret"));
    assert!(!raw.contains("password"));
}

#[tokio::test]
async fn duplicate_username_is_a_validation_error() {
    let app = TestApp::new().await;
    app.user_token("bob").await;

    let res = app
        .post(
            "/api/v1/register",
            None,
            json!({ "username": "bob", "password": "other" }),
        )
        .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["success"], false);
    assert!(res.body["fields"]["username"].is_array());
}

#[tokio::test]
async fn register_rejects_blank_password_and_bad_username() {
    let app = TestApp::new().await;

    let blank = app
        .post("/api/v1/register", None, json!({ "username": "carol", "password": "" }))
        .await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);
    assert!(blank.body["fields"]["password"].is_array());

    let bad_name = app
        .post(
            "/api/v1/register",
            None,
            json!({ "username": "carol smith", "password": "pw" }),
        )
        .await;
    assert_eq!(bad_name.status, StatusCode::BAD_REQUEST);
    assert!(bad_name.body["fields"]["username"].is_array());
}

#[tokio::test]
async fn register_only_accepts_post() {
    let app = TestApp::new().await;
    let res = app
        .request(Method::GET, "/api/v1/register", None, None)
        .await;
    assert_eq!(res.status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let app = TestApp::new().await;
    app.user_token("dave").await;

    let res = app
        .post(
            "/api/v1/login",
            None,
            json!({ "username": "dave", "password": "wrong" }),
        )
        .await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);

    let unknown = app
        .post(
            "/api/v1/login",
            None,
            json!({ "username": "nobody", "password": USER_PASSWORD }),
        )
        .await;
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn passwords_past_72_bytes_are_rejected_not_truncated() {
    let app = TestApp::new().await;
    let prefix = "a".repeat(72);

    let res = app
        .post(
            "/api/v1/register",
            None,
            json!({ "username": "ivan", "password": format!("{prefix}REAL-SUFFIX") }),
        )
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.body["fields"]["password"].is_array());

    // Multibyte input under the character limit but over the byte limit
    let res = app
        .post(
            "/api/v1/register",
            None,
            json!({ "username": "ivan", "password": "€".repeat(30) }),
        )
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    // A 72-byte password does not accept extra trailing bytes at login
    let res = app
        .post(
            "/api/v1/register",
            None,
            json!({ "username": "ivan", "password": &prefix }),
        )
        .await;
    assert_eq!(res.status, StatusCode::CREATED);
    let res = app
        .post(
            "/api/v1/login",
            None,
            json!({ "username": "ivan", "password": format!("{prefix}totally-different") }),
        )
        .await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    app.login("ivan", &prefix).await;
}

#[tokio::test]
async fn login_returns_bearer_token_pair() {
    let app = TestApp::new().await;
    app.user_token("erin").await;

    let tokens = app.login("erin", USER_PASSWORD).await;
    assert_eq!(tokens["token_type"], "Bearer");
    assert_eq!(tokens["expires_in"], 3600);
    assert!(tokens["refresh"].as_str().is_some_and(|t| !t.is_empty()));
    assert_ne!(tokens["access"], tokens["refresh"]);
}

#[tokio::test]
async fn refresh_issues_a_working_access_token() {
    let app = TestApp::new().await;
    app.user_token("frank").await;
    let tokens = app.login("frank", USER_PASSWORD).await;

    let res = app
        .post("/api/v1/refresh", None, json!({ "refresh": tokens["refresh"] }))
        .await;
    assert_eq!(res.status, StatusCode::OK);
    let access = access_of(res.data());

    let hotels = app.get("/api/v1/hotels", &access).await;
    assert_eq!(hotels.status, StatusCode::OK);
}

#[tokio::test]
async fn token_types_are_not_interchangeable() {
    let app = TestApp::new().await;
    app.user_token("grace").await;
    let tokens = app.login("grace", USER_PASSWORD).await;

    // Access token cannot be refreshed
    let res = app
        .post("/api/v1/refresh", None, json!({ "refresh": tokens["access"] }))
        .await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);

    // Refresh token is not a bearer credential
    let refresh = tokens["refresh"].as_str().unwrap();
    let res = app.get("/api/v1/hotels", refresh).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn verify_accepts_valid_and_rejects_garbage() {
    let app = TestApp::new().await;
    let token = app.user_token("heidi").await;

    let ok = app
        .post("/api/v1/verify", None, json!({ "token": token }))
        .await;
    assert_eq!(ok.status, StatusCode::OK);
    assert_eq!(ok.body["success"], true);

    let bad = app
        .post("/api/v1/verify", None, json!({ "token": "not.a.jwt" }))
        .await;
    assert_eq!(bad.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn protected_routes_require_a_token() {
    let app = TestApp::new().await;

    for uri in ["/api/v1/hotels", "/api/v1/rooms", "/api/v1/hotel-rooms", "/api/v1/reservations"] {
        let res = app.request(Method::GET, uri, None, None).await;
        assert_eq!(res.status, StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(res.headers[header::WWW_AUTHENTICATE], "Bearer");
    }

    let res = app.get("/api/v1/hotels", "garbage").await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn health_and_metrics_are_public() {
    let app = TestApp::new().await;

    let health = app.request(Method::GET, "/health", None, None).await;
    assert_eq!(health.status, StatusCode::OK);

    let metrics = app.request(Method::GET, "/metrics", None, None).await;
    assert_eq!(metrics.status, StatusCode::OK);
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = TestApp::new().await;
    let res = app.request(Method::GET, "/health", None, None).await;
    assert!(res.headers.contains_key("x-request-id"));
}
