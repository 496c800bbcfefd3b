//! Student API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use super::ApiResult;
use crate::errors::AppError;
use crate::filter::{self, ListCriteria};
use crate::models::{CreateStudentRequest, Student, UpdateStudentRequest};
use crate::validation::{validate_create, validate_update};
use crate::AppState;

/// Confirmation body for a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteConfirmation {
    pub message: &'static str,
}

/// GET /api/students - List students, optionally narrowed by criteria.
pub async fn list_students(
    State(state): State<AppState>,
    Query(criteria): Query<ListCriteria>,
) -> ApiResult<Json<Vec<Student>>> {
    let students = filter::apply(state.store.list(), &criteria);
    Ok(Json(students))
}

/// GET /api/students/{id} - Get a single student.
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Student>> {
    match state.store.get(&id) {
        Some(student) => Ok(Json(student)),
        None => Err(AppError::NotFound(format!("Student {} not found", id))),
    }
}

/// POST /api/students - Create a new student.
pub async fn create_student(
    State(state): State<AppState>,
    payload: Result<Json<CreateStudentRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Student>)> {
    let Json(request) = payload?;
    let candidate = validate_create(&request)?;

    let student = state.store.insert(candidate);
    Ok((StatusCode::CREATED, Json(student)))
}

/// PUT /api/students/{id} - Update a student with a partial payload.
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateStudentRequest>, JsonRejection>,
) -> ApiResult<Json<Student>> {
    let Json(request) = payload?;
    validate_update(&request)?;

    match state.store.update(&id, &request) {
        Some(student) => Ok(Json(student)),
        None => Err(AppError::NotFound(format!("Student {} not found", id))),
    }
}

/// DELETE /api/students/{id} - Delete a student.
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteConfirmation>> {
    if state.store.delete(&id) {
        Ok(Json(DeleteConfirmation {
            message: "Student deleted successfully",
        }))
    } else {
        Err(AppError::NotFound(format!("Student {} not found", id)))
    }
}
