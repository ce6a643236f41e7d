//! Loan record administration
//!
//! These handlers edit loan rows directly and never touch book availability;
//! lending and returning go through the circulation handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use super::domain_error_response;
use crate::domain::{LoanStatus, NewLoan};
use crate::infrastructure::AppState;
use crate::utils::dates::parse_datetime;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateLoanRequest {
    pub book_id: i32,
    pub user_id: i32,
    pub loan_date: String,
    pub due_date: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateLoanStatusRequest {
    pub id: Option<i32>,
    pub status: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/loans",
    responses(
        (status = 200, description = "All loan records")
    )
)]
pub async fn list_loans(State(state): State<AppState>) -> impl IntoResponse {
    match state.loan_repo.find_all().await {
        Ok(loans) => Json(json!({ "loans": loans })).into_response(),
        Err(e) => domain_error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/loans-active",
    responses(
        (status = 200, description = "Loans still active")
    )
)]
pub async fn list_active_loans(State(state): State<AppState>) -> impl IntoResponse {
    match state.loan_repo.find_active().await {
        Ok(loans) => Json(json!({ "loans": loans })).into_response(),
        Err(e) => domain_error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/loans",
    request_body = CreateLoanRequest,
    responses(
        (status = 201, description = "Loan recorded"),
        (status = 422, description = "Bad date")
    )
)]
pub async fn create_loan(
    State(state): State<AppState>,
    Json(payload): Json<CreateLoanRequest>,
) -> impl IntoResponse {
    let dates = parse_datetime(&payload.loan_date)
        .and_then(|loan| parse_datetime(&payload.due_date).map(|due| (loan, due)));
    let (loan_date, due_date) = match dates {
        Ok(dates) => dates,
        Err(e) => return domain_error_response(e),
    };

    let loan = NewLoan::new(payload.book_id, payload.user_id, loan_date, due_date);

    match state.loan_repo.save(loan).await {
        Ok(_) => (
            StatusCode::CREATED,
            Json(json!({ "message": "Loan added successfully" })),
        )
            .into_response(),
        Err(e) => domain_error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/loans/{id}",
    params(("id" = i32, Path, description = "Loan id")),
    responses(
        (status = 200, description = "Loan found"),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn get_loan(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.loan_repo.find_by_id(id).await {
        Ok(Some(loan)) => Json(json!({ "loan": loan })).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Loan not found" })),
        )
            .into_response(),
        Err(e) => domain_error_response(e),
    }
}

#[utoipa::path(
    patch,
    path = "/api/loans-status",
    request_body = UpdateLoanStatusRequest,
    responses(
        (status = 200, description = "Status changed"),
        (status = 400, description = "Missing field or unknown status"),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn update_loan_status(
    State(state): State<AppState>,
    Json(payload): Json<UpdateLoanStatusRequest>,
) -> impl IntoResponse {
    let (Some(id), Some(status)) = (payload.id, payload.status) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Loan id and status are required." })),
        )
            .into_response();
    };

    let status: LoanStatus = match status.parse() {
        Ok(status) => status,
        Err(e) => return domain_error_response(e),
    };

    match state.loan_repo.update_status(id, status).await {
        Ok(true) => {
            tracing::info!(loan_id = id, status = %status, "Loan status changed manually");
            Json(json!({ "message": "Loan status updated successfully." })).into_response()
        }
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Loan not found" })),
        )
            .into_response(),
        Err(e) => domain_error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/loans/{id}",
    params(("id" = i32, Path, description = "Loan id")),
    responses(
        (status = 200, description = "Loan deleted"),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn delete_loan(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.loan_repo.delete(id).await {
        Ok(()) => Json(json!({ "message": "Loan deleted successfully" })).into_response(),
        Err(e) => domain_error_response(e),
    }
}
