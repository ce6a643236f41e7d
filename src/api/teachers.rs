//! Teacher registry handlers

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
use crate::domain::{Email, NewTeacher, Person};
use crate::infrastructure::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTeacherRequest {
    pub name: String,
    pub email: String,
    pub department: String,
}

#[utoipa::path(
    get,
    path = "/api/teachers",
    responses(
        (status = 200, description = "Registered teachers")
    )
)]
pub async fn list_teachers(State(state): State<AppState>) -> impl IntoResponse {
    match state.teacher_repo.find_all().await {
        Ok(teachers) => {
            let teachers: Vec<Person> = teachers.into_iter().map(Person::Teacher).collect();
            Json(json!({ "teachers": teachers })).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/teachers",
    request_body = CreateTeacherRequest,
    responses(
        (status = 201, description = "Teacher added"),
        (status = 422, description = "Invalid or duplicate e-mail")
    )
)]
pub async fn create_teacher(
    State(state): State<AppState>,
    Json(payload): Json<CreateTeacherRequest>,
) -> impl IntoResponse {
    let email = match Email::parse(payload.email) {
        Ok(email) => email,
        Err(e) => return domain_error_response(e),
    };

    let teacher = NewTeacher {
        name: payload.name,
        email,
        department: payload.department,
    };

    match state.teacher_repo.create(teacher).await {
        Ok(teacher) => (
            StatusCode::CREATED,
            Json(json!({
                "message": "Teacher added successfully",
                "teacher": Person::Teacher(teacher)
            })),
        )
            .into_response(),
        Err(e) => domain_error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/teachers/{id}",
    params(("id" = i32, Path, description = "Teacher id")),
    responses(
        (status = 200, description = "Teacher found"),
        (status = 404, description = "Teacher not found")
    )
)]
pub async fn get_teacher(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.teacher_repo.find_by_id(id).await {
        Ok(Some(teacher)) => {
            Json(json!({ "teacher": Person::Teacher(teacher) })).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Teacher not found" })),
        )
            .into_response(),
        Err(e) => domain_error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/teachers/{id}",
    params(("id" = i32, Path, description = "Teacher id")),
    responses(
        (status = 200, description = "Teacher deleted"),
        (status = 404, description = "Teacher not found")
    )
)]
pub async fn delete_teacher(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match state.teacher_repo.delete(id).await {
        Ok(()) => Json(json!({ "message": "Teacher deleted successfully" })).into_response(),
        Err(e) => domain_error_response(e),
    }
}
