//! Shared harness: the real router over a migrated in-memory SQLite database.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use serde_json::{json, Value};
use tower::ServiceExt;

use hotel_booking::infrastructure::crypto::jwt::JwtConfig;
use hotel_booking::infrastructure::database::migrator::Migrator;
use hotel_booking::interfaces::http::modules::metrics::prometheus_handle;
use hotel_booking::{create_api_router, ApiContext};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin-pass";
pub const USER_PASSWORD: &str = "guest-pass";

const TEST_BCRYPT_COST: u32 = 4;

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }
}

pub struct TestApp {
    pub router: Router,
    pub ctx: ApiContext,
}

async fn memory_db() -> DatabaseConnection {
    // A single long-lived connection keeps the in-memory database alive.
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await.expect("connect sqlite");
    Migrator::up(&db, None).await.expect("migrate");
    db
}

impl TestApp {
    pub async fn new() -> Self {
        let db = memory_db().await;
        let jwt = JwtConfig {
            secret: "integration-test-secret".into(),
            ..JwtConfig::default()
        };
        let ctx = ApiContext::new(db, jwt, TEST_BCRYPT_COST, prometheus_handle());
        ctx.users
            .ensure_superuser(ADMIN_USERNAME, Some("admin@example.com"), ADMIN_PASSWORD)
            .await
            .expect("seed superuser");
        let router = create_api_router(ctx.clone());
        Self { router, ctx }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        send(self.router.clone(), method, uri, token, body).await
    }

    pub async fn get(&self, uri: &str, token: &str) -> TestResponse {
        self.request(Method::GET, uri, Some(token), None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn login(&self, username: &str, password: &str) -> Value {
        let res = self
            .post(
                "/api/v1/login",
                None,
                json!({ "username": username, "password": password }),
            )
            .await;
        assert_eq!(res.status, StatusCode::OK, "login failed: {}", res.body);
        res.data().clone()
    }

    pub async fn admin_token(&self) -> String {
        access_of(&self.login(ADMIN_USERNAME, ADMIN_PASSWORD).await)
    }

    /// Register a regular user and return its access token.
    pub async fn user_token(&self, username: &str) -> String {
        let res = self
            .post(
                "/api/v1/register",
                None,
                json!({ "username": username, "password": USER_PASSWORD }),
            )
            .await;
        assert_eq!(res.status, StatusCode::CREATED, "register failed: {}", res.body);
        access_of(&self.login(username, USER_PASSWORD).await)
    }

    pub async fn create_hotel(&self, token: &str, name: &str) -> i64 {
        let res = self
            .post(
                "/api/v1/hotels",
                Some(token),
                json!({ "name": name, "address": "1 Main St", "city": "Springfield" }),
            )
            .await;
        assert_eq!(res.status, StatusCode::CREATED, "hotel create failed: {}", res.body);
        res.data()["id"].as_i64().expect("hotel id")
    }

    pub async fn create_room(
        &self,
        token: &str,
        hotel: i64,
        room_type: &str,
        capacity: i32,
        price: &str,
        available_dates: &[&str],
    ) -> i64 {
        let res = self
            .post(
                "/api/v1/rooms",
                Some(token),
                json!({
                    "hotel": hotel,
                    "room_type": room_type,
                    "capacity": capacity,
                    "price": price,
                    "available_dates": available_dates,
                }),
            )
            .await;
        assert_eq!(res.status, StatusCode::CREATED, "room create failed: {}", res.body);
        res.data()["id"].as_i64().expect("room id")
    }

    pub async fn reserve(
        &self,
        token: &str,
        room: i64,
        check_in: &str,
        check_out: &str,
    ) -> TestResponse {
        self.post(
            "/api/v1/reservations",
            Some(token),
            json!({ "room": room, "check_in_date": check_in, "check_out_date": check_out }),
        )
        .await
    }
}

pub fn access_of(tokens: &Value) -> String {
    tokens["access"].as_str().expect("access token").to_string()
}

pub async fn send(
    router: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("build request");

    let response = router.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    TestResponse {
        status,
        headers,
        body,
    }
}
