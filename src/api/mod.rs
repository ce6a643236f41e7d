pub mod books;
pub mod circulation;
pub mod health;
pub mod loan;
pub mod students;
pub mod teachers;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
};
use serde_json::json;

use crate::domain::DomainError;
use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book).delete(books::delete_book),
        )
        // Students
        .route(
            "/students",
            get(students::list_students).post(students::create_student),
        )
        .route(
            "/students/:id",
            get(students::get_student).delete(students::delete_student),
        )
        // Teachers
        .route(
            "/teachers",
            get(teachers::list_teachers).post(teachers::create_teacher),
        )
        .route(
            "/teachers/:id",
            get(teachers::get_teacher).delete(teachers::delete_teacher),
        )
        // Loan records
        .route("/loans", get(loan::list_loans).post(loan::create_loan))
        .route("/loans/:id", get(loan::get_loan).delete(loan::delete_loan))
        .route("/loans-status", patch(loan::update_loan_status))
        .route("/loans-active", get(loan::list_active_loans))
        // Circulation
        .route("/loans-checkout", post(circulation::checkout))
        .route("/loans-checkin", post(circulation::checkin))
        .with_state(state)
}

/// Map a repository failure to an HTTP response.
pub(crate) fn domain_error_response(e: DomainError) -> Response {
    let status = match &e {
        DomainError::NotFound => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::UnknownLoanStatus(_) => StatusCode::BAD_REQUEST,
        DomainError::Database(_) | DomainError::Internal(_) => {
            tracing::error!("Request failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (status, Json(json!({ "error": e.to_string() }))).into_response()
}
