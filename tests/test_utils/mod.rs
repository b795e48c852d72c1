//! Test utilities for integration tests
use std::env;
use std::fs;
use std::sync::{Arc, RwLock};

use axum::http::{Request, StatusCode};
use axum::{Router, body::Body};
use tower::util::ServiceExt;

use bookd::api::AppState;
use bookd::api::app;
use bookd::core::AppConfig;
use bookd::core::db::async_db;
use bookd::core::db::initialize_db;
use bookd::identity::create_user;

/// Username and password pairs registered by `test_app`.
pub const TEST_USERS: &[(&str, &str)] = &[("alice", "alice-pass"), ("bob", "bob-pass")];

/// Creates an empty initialized database in a unique temp directory.
/// The unique name keeps parallel tests fully isolated.
pub async fn test_db() -> tokio_rusqlite::Connection {
    let dir = env::temp_dir().join(format!("bookd-test-{}", uuid::Uuid::new_v4()));
    let db_path = dir.join("db");
    fs::create_dir_all(&db_path).expect("Failed to create db directory");

    let db = async_db(db_path.to_str().unwrap())
        .await
        .expect("Failed to connect to async db");
    db.call(|conn| {
        initialize_db(conn).expect("Failed to initialize db");
        Ok(())
    })
    .await
    .unwrap();

    db
}

/// Creates a test application router over a fresh database with the
/// users from `TEST_USERS` registered.
pub async fn test_app() -> Router {
    let db = test_db().await;

    for (username, password) in TEST_USERS {
        create_user(&db, username, password)
            .await
            .expect("Failed to create test user");
    }

    let app_config = AppConfig {
        storage_path: env::temp_dir().display().to_string(),
        db_path: String::from("unused-by-tests"),
        session_ttl_hours: 24,
    };
    let app_state = AppState::new(db, app_config);
    app(Arc::new(RwLock::new(app_state)))
}

/// Collects a response body into a string.
pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body was not valid utf-8")
}

/// Logs in through the API and returns the bearer token.
pub async fn login(app: &Router, username: &str, password: &str) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/auth/login")
                .method("POST")
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::json!({
                        "username": username,
                        "password": password,
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_to_string(response.into_body()).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    json["token"]
        .as_str()
        .expect("Login response had no token")
        .to_string()
}
