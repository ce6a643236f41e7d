//! Student registry handlers

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
use crate::domain::{Email, NewStudent, Person};
use crate::infrastructure::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStudentRequest {
    pub name: String,
    pub email: String,
    pub grade_level: String,
    pub course: String,
}

#[utoipa::path(
    get,
    path = "/api/students",
    responses(
        (status = 200, description = "Registered students")
    )
)]
pub async fn list_students(State(state): State<AppState>) -> impl IntoResponse {
    match state.student_repo.find_all().await {
        Ok(students) => {
            let students: Vec<Person> = students.into_iter().map(Person::Student).collect();
            Json(json!({ "students": students })).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/students",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student added"),
        (status = 422, description = "Invalid or duplicate e-mail")
    )
)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<CreateStudentRequest>,
) -> impl IntoResponse {
    let email = match Email::parse(payload.email) {
        Ok(email) => email,
        Err(e) => return domain_error_response(e),
    };

    let student = NewStudent {
        name: payload.name,
        email,
        grade_level: payload.grade_level,
        course: payload.course,
    };

    match state.student_repo.create(student).await {
        Ok(student) => (
            StatusCode::CREATED,
            Json(json!({
                "message": "Student added successfully",
                "student": Person::Student(student)
            })),
        )
            .into_response(),
        Err(e) => domain_error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/students/{id}",
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student found"),
        (status = 404, description = "Student not found")
    )
)]
pub async fn get_student(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.student_repo.find_by_id(id).await {
        Ok(Some(student)) => {
            Json(json!({ "student": Person::Student(student) })).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Student not found" })),
        )
            .into_response(),
        Err(e) => domain_error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student deleted"),
        (status = 404, description = "Student not found")
    )
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match state.student_repo.delete(id).await {
        Ok(()) => Json(json!({ "message": "Student deleted successfully" })).into_response(),
        Err(e) => domain_error_response(e),
    }
}
