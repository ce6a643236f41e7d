mod common;

use axum::http::StatusCode;
use common::{create_book, create_student, create_teacher, post_raw, send, test_app};
use serde_json::json;

#[tokio::test]
async fn test_checkout_and_late_checkin() {
    let app = test_app().await;
    let book_id = create_book(&app, "Dune", "978-0441172719").await;
    let student_id = create_student(&app, "ana@school.example").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/loans-checkout",
        Some(json!({
            "book_id": book_id,
            "user_id": student_id,
            "loan_date": "2024-01-01",
            "due_date": "2024-01-08"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Book checkout created successfully.");

    let (_, book) = send(&app, "GET", &format!("/api/books/{book_id}"), None).await;
    assert_eq!(book["book"]["available"], false);

    let (_, active) = send(&app, "GET", "/api/loans-active", None).await;
    let loans = active["loans"].as_array().unwrap();
    assert_eq!(loans.len(), 1);
    assert_eq!(loans[0]["status"], "active");
    assert_eq!(loans[0]["return_date"], serde_json::Value::Null);
    let loan_id = loans[0]["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        "POST",
        "/api/loans-checkin",
        Some(json!({
            "book_id": book_id,
            "id": loan_id,
            "return_date": "2024-01-10"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Book checkin created successfully.");

    let (_, book) = send(&app, "GET", &format!("/api/books/{book_id}"), None).await;
    assert_eq!(book["book"]["available"], true);

    let (_, loan) = send(&app, "GET", &format!("/api/loans/{loan_id}"), None).await;
    assert_eq!(loan["loan"]["status"], "overdue");
    assert_eq!(loan["loan"]["return_date"], "2024-01-10 00:00:00");
    assert_eq!(loan["loan"]["due_date"], "2024-01-08 00:00:00");

    let (_, active) = send(&app, "GET", "/api/loans-active", None).await;
    assert!(active["loans"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_teacher_returns_on_due_date() {
    let app = test_app().await;
    let book_id = create_book(&app, "Foundation", "978-0553293357").await;
    let teacher_id = create_teacher(&app, "carla@school.example").await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/loans-checkout",
        Some(json!({
            "book_id": book_id,
            "user_id": teacher_id,
            "loan_date": "2024-03-01 09:00:00",
            "due_date": "2024-03-15 17:00:00"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, loans) = send(&app, "GET", "/api/loans", None).await;
    let loan_id = loans["loans"][0]["id"].as_i64().unwrap();

    let (status, _) = send(
        &app,
        "POST",
        "/api/loans-checkin",
        Some(json!({
            "book_id": book_id,
            "id": loan_id,
            "return_date": "2024-03-15 17:00:00"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, loan) = send(&app, "GET", &format!("/api/loans/{loan_id}"), None).await;
    assert_eq!(loan["loan"]["status"], "returned");
}

#[tokio::test]
async fn test_checkout_of_lent_book_is_rejected() {
    let app = test_app().await;
    let book_id = create_book(&app, "Dune", "978-0441172719").await;
    let first = create_student(&app, "first@school.example").await;
    let second = create_student(&app, "second@school.example").await;

    let checkout = |user_id: i64| {
        json!({
            "book_id": book_id,
            "user_id": user_id,
            "loan_date": "2024-01-01",
            "due_date": "2024-01-08"
        })
    };

    let (status, _) = send(&app, "POST", "/api/loans-checkout", Some(checkout(first))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "POST", "/api/loans-checkout", Some(checkout(second))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Error: Book has not yet returned");

    let (_, loans) = send(&app, "GET", "/api/loans", None).await;
    assert_eq!(loans["loans"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_checkout_missing_fields() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/loans-checkout",
        Some(json!({ "book_id": 1, "user_id": 1, "loan_date": "2024-01-01" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Required data missing.");

    let (status, body) = send(
        &app,
        "POST",
        "/api/loans-checkin",
        Some(json!({ "book_id": 1, "return_date": "2024-01-01" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Required data missing.");
}

#[tokio::test]
async fn test_checkout_unknown_book() {
    let app = test_app().await;
    let student_id = create_student(&app, "ana@school.example").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/loans-checkout",
        Some(json!({
            "book_id": 999,
            "user_id": student_id,
            "loan_date": "2024-01-01",
            "due_date": "2024-01-08"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Error: Book not found");
}

#[tokio::test]
async fn test_checkout_unknown_borrower_leaves_book_available() {
    let app = test_app().await;
    let book_id = create_book(&app, "Dune", "978-0441172719").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/loans-checkout",
        Some(json!({
            "book_id": book_id,
            "user_id": 4242,
            "loan_date": "2024-01-01",
            "due_date": "2024-01-08"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Book checkout not completed.");

    let (_, book) = send(&app, "GET", &format!("/api/books/{book_id}"), None).await;
    assert_eq!(book["book"]["available"], true);
}

#[tokio::test]
async fn test_checkout_bad_date() {
    let app = test_app().await;
    let book_id = create_book(&app, "Dune", "978-0441172719").await;
    let student_id = create_student(&app, "ana@school.example").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/loans-checkout",
        Some(json!({
            "book_id": book_id,
            "user_id": student_id,
            "loan_date": "next tuesday",
            "due_date": "2024-01-08"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().starts_with("Error: "));

    let (_, book) = send(&app, "GET", &format!("/api/books/{book_id}"), None).await;
    assert_eq!(book["book"]["available"], true);
}

#[tokio::test]
async fn test_checkin_of_book_on_shelf_is_rejected() {
    let app = test_app().await;
    let book_id = create_book(&app, "Dune", "978-0441172719").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/loans-checkin",
        Some(json!({
            "book_id": book_id,
            "id": 1,
            "return_date": "2024-01-10"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Error: Book is currently unavailable");
}

#[tokio::test]
async fn test_checkin_with_unknown_loan() {
    let app = test_app().await;
    let book_id = create_book(&app, "Dune", "978-0441172719").await;
    let student_id = create_student(&app, "ana@school.example").await;

    send(
        &app,
        "POST",
        "/api/loans-checkout",
        Some(json!({
            "book_id": book_id,
            "user_id": student_id,
            "loan_date": "2024-01-01",
            "due_date": "2024-01-08"
        })),
    )
    .await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/loans-checkin",
        Some(json!({
            "book_id": book_id,
            "id": 999,
            "return_date": "2024-01-05"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Error: Loan not found");

    // The book flag is written before the loan is looked up
    let (_, book) = send(&app, "GET", &format!("/api/books/{book_id}"), None).await;
    assert_eq!(book["book"]["available"], true);
}

#[tokio::test]
async fn test_unreadable_bodies_count_as_missing_data() {
    let app = test_app().await;

    for (content_type, body) in [
        (Some("application/json"), ""),
        (Some("application/json"), "{\"book_id\": 1,"),
        (Some("application/json"), "null"),
        (None, ""),
    ] {
        let (status, json) = post_raw(&app, "/api/loans-checkout", content_type, body).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{body:?}");
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "Required data missing.");
    }

    let (status, json) = post_raw(&app, "/api/loans-checkin", None, "").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["message"], "Required data missing.");
}

#[tokio::test]
async fn test_numeric_string_ids_and_plain_text_content_type() {
    let app = test_app().await;
    let book_id = create_book(&app, "Dune", "978-0441172719").await;
    let student_id = create_student(&app, "ana@school.example").await;

    let body = json!({
        "book_id": book_id.to_string(),
        "user_id": student_id.to_string(),
        "loan_date": "2024-01-01",
        "due_date": "2024-01-08"
    })
    .to_string();
    let (status, json) = post_raw(&app, "/api/loans-checkout", Some("text/plain"), &body).await;
    assert_eq!(status, StatusCode::CREATED, "{json}");
    assert_eq!(json["message"], "Book checkout created successfully.");

    let (_, loans) = send(&app, "GET", "/api/loans", None).await;
    let loan_id = loans["loans"][0]["id"].as_i64().unwrap();

    let body = json!({
        "book_id": book_id.to_string(),
        "id": loan_id,
        "return_date": "2024-01-05"
    })
    .to_string();
    let (status, _) = post_raw(&app, "/api/loans-checkin", None, &body).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, loan) = send(&app, "GET", &format!("/api/loans/{loan_id}"), None).await;
    assert_eq!(loan["loan"]["status"], "returned");
}

#[tokio::test]
async fn test_wrong_typed_fields_are_rejected() {
    let app = test_app().await;

    for body in [
        json!({ "book_id": "one", "user_id": 1, "loan_date": "2024-01-01", "due_date": "2024-01-08" }),
        json!({ "book_id": 1, "user_id": [1], "loan_date": "2024-01-01", "due_date": "2024-01-08" }),
        json!({ "book_id": 1, "user_id": 1, "loan_date": 20240101, "due_date": "2024-01-08" }),
    ] {
        let (status, json) = send(&app, "POST", "/api/loans-checkout", Some(body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(json["status"], "error");
        assert!(json["message"].as_str().unwrap().starts_with("Error: "));
    }
}
