// Shared test utilities for integration tests
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sea_orm_migration::MigratorTrait;
use showbill_db::{AppState, DatabaseConfig};
use std::sync::Arc;
use tower::ServiceExt;

/// Create a test AppState over a migrated in-memory SQLite database
pub async fn test_app_state() -> Arc<AppState> {
    let db = showbill_db::connect(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory database");
    showbill_migration::Migrator::up(&db, None)
        .await
        .expect("migrations");
    Arc::new(AppState { db })
}

pub async fn test_app() -> (Router, Arc<AppState>) {
    let state = test_app_state().await;
    (showbill_server::build_router(state.clone()), state)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.expect("request");
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    TestResponse {
        status,
        location,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

/// POST an urlencoded form. Names and values are encoded here.
pub async fn post_form(app: &Router, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
}

pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    send(
        app,
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub const HOP: &[(&str, &str)] = &[
    ("name", "The Musical Hop"),
    ("city", "San Francisco"),
    ("state", "CA"),
    ("address", "1015 Folsom Street"),
    ("phone", "123-123-1234"),
    ("image_link", "https://images.example.com/hop.jpg"),
    ("facebook_link", "https://www.facebook.com/TheMusicalHop"),
];

pub const DUELING_PIANOS: &[(&str, &str)] = &[
    ("name", "The Dueling Pianos Bar"),
    ("city", "New York"),
    ("state", "NY"),
    ("address", "335 Delancey Street"),
    ("phone", "914-003-1132"),
];

pub const PARK_SQUARE: &[(&str, &str)] = &[
    ("name", "Park Square Live Music & Coffee"),
    ("city", "San Francisco"),
    ("state", "CA"),
    ("address", "34 Whiskey Moore Ave"),
    ("phone", "415-000-1234"),
];

pub const PETALS: &[(&str, &str)] = &[
    ("name", "Guns N Petals"),
    ("city", "San Francisco"),
    ("state", "CA"),
    ("phone", "326-123-5000"),
    ("genres", "Rock n Roll"),
];

pub const QUEVEDO: &[(&str, &str)] = &[
    ("name", "Matt Quevedo"),
    ("city", "New York"),
    ("state", "NY"),
    ("phone", "300-400-5000"),
    ("genres", "Jazz"),
];

pub const SAX_BAND: &[(&str, &str)] = &[
    ("name", "The Wild Sax Band"),
    ("city", "San Francisco"),
    ("state", "CA"),
    ("phone", "432-325-5432"),
    ("genres", "Jazz"),
    ("genres", "Classical"),
];
