//! Checkout and check-in endpoints
//!
//! Responses use a `{"status", "message"}` envelope. Missing fields give 422,
//! rule violations give 400 with the rule's message, and a lifecycle call
//! that completes without effect gives 409.

use axum::{
    Json, async_trait,
    body::Bytes,
    extract::{FromRequest, Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::{Value, json};
use std::fmt::Display;
use utoipa::ToSchema;

use crate::domain::LoanError;
use crate::infrastructure::AppState;
use crate::utils::dates::parse_datetime;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CheckoutRequest {
    #[serde(default, deserialize_with = "loose_id")]
    pub book_id: Option<i32>,
    #[serde(default, deserialize_with = "loose_id")]
    pub user_id: Option<i32>,
    /// `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DD`
    pub loan_date: Option<String>,
    pub due_date: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CheckinRequest {
    #[serde(default, deserialize_with = "loose_id")]
    pub book_id: Option<i32>,
    /// Loan being closed
    #[serde(default, deserialize_with = "loose_id")]
    pub id: Option<i32>,
    pub return_date: Option<String>,
}

/// Ids may arrive as numbers or numeric strings.
fn loose_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i32>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i32),
        Text(String),
    }

    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Number(id)) => Ok(Some(id)),
        Some(RawId::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid id '{}'", text))),
    }
}

/// JSON body that answers in the circulation envelope when it cannot be read.
///
/// The content type is not checked. A body that is empty, not JSON, or `null`
/// counts as missing data; JSON with a field of the wrong type is rejected.
pub struct CirculationBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for CirculationBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| rejected(e.body_text()))?;

        let value = match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Null) | Err(_) => return Err(missing_data()),
            Ok(value) => value,
        };

        serde_json::from_value(value)
            .map(CirculationBody)
            .map_err(rejected)
    }
}

fn envelope(status: StatusCode, outcome: &str, message: &str) -> Response {
    (
        status,
        Json(json!({ "status": outcome, "message": message })),
    )
        .into_response()
}

fn missing_data() -> Response {
    envelope(
        StatusCode::UNPROCESSABLE_ENTITY,
        "error",
        "Required data missing.",
    )
}

fn rejected(e: impl Display) -> Response {
    envelope(StatusCode::BAD_REQUEST, "error", &format!("Error: {}", e))
}

fn loan_failure(e: LoanError) -> Response {
    if let LoanError::Store(inner) = &e {
        tracing::error!("Circulation store failure: {}", inner);
    }
    rejected(e)
}

#[utoipa::path(
    post,
    path = "/api/loans-checkout",
    request_body = CheckoutRequest,
    responses(
        (status = 201, description = "Book checked out"),
        (status = 400, description = "Book missing, already lent, or bad date"),
        (status = 409, description = "Borrower unknown or loan not stored"),
        (status = 422, description = "Required data missing")
    )
)]
pub async fn checkout(
    State(state): State<AppState>,
    CirculationBody(payload): CirculationBody<CheckoutRequest>,
) -> Response {
    let (Some(book_id), Some(user_id), Some(loan_date), Some(due_date)) = (
        payload.book_id,
        payload.user_id,
        payload.loan_date,
        payload.due_date,
    ) else {
        return missing_data();
    };

    let loan_date = match parse_datetime(&loan_date) {
        Ok(date) => date,
        Err(e) => return rejected(e),
    };
    let due_date = match parse_datetime(&due_date) {
        Ok(date) => date,
        Err(e) => return rejected(e),
    };

    match state
        .loans
        .checkout(book_id, user_id, loan_date, due_date)
        .await
    {
        Ok(true) => envelope(
            StatusCode::CREATED,
            "success",
            "Book checkout created successfully.",
        ),
        Ok(false) => envelope(
            StatusCode::CONFLICT,
            "error",
            "Book checkout not completed.",
        ),
        Err(e) => loan_failure(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/loans-checkin",
    request_body = CheckinRequest,
    responses(
        (status = 201, description = "Book returned and loan closed"),
        (status = 400, description = "Book or loan missing, book not lent, or bad date"),
        (status = 409, description = "Loan not updated"),
        (status = 422, description = "Required data missing")
    )
)]
pub async fn checkin(
    State(state): State<AppState>,
    CirculationBody(payload): CirculationBody<CheckinRequest>,
) -> Response {
    let (Some(book_id), Some(loan_id), Some(return_date)) =
        (payload.book_id, payload.id, payload.return_date)
    else {
        return missing_data();
    };

    let return_date = match parse_datetime(&return_date) {
        Ok(date) => date,
        Err(e) => return rejected(e),
    };

    match state.loans.checkin(book_id, loan_id, return_date).await {
        Ok(true) => envelope(
            StatusCode::CREATED,
            "success",
            "Book checkin created successfully.",
        ),
        Ok(false) => envelope(StatusCode::CONFLICT, "error", "Book checkin not completed."),
        Err(e) => loan_failure(e),
    }
}
