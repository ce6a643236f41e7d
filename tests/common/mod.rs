#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use school_library::{db, server};
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot`

pub async fn test_app() -> Router {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    server::build_router(db, &[])
}

/// Send a request and decode the JSON body.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

pub async fn create_book(app: &Router, title: &str, isbn: &str) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/api/books",
        Some(serde_json::json!({
            "title": title,
            "author": "Test Author",
            "isbn": isbn
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["book"]["id"].as_i64().unwrap()
}

pub async fn create_student(app: &Router, email: &str) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/api/students",
        Some(serde_json::json!({
            "name": "Test Student",
            "email": email,
            "grade_level": "9",
            "course": "Science"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["student"]["id"].as_i64().unwrap()
}

pub async fn create_teacher(app: &Router, email: &str) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/api/teachers",
        Some(serde_json::json!({
            "name": "Test Teacher",
            "email": email,
            "department": "History"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["teacher"]["id"].as_i64().unwrap()
}

/// Post a raw body, optionally without a content type.
pub async fn post_raw(
    app: &Router,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let req = builder.body(Body::from(body.to_owned())).unwrap();

    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}
