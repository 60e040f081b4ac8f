//! 学生 API 路由（`/api/alunos`）。

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::{JsonRejection, PathRejection}},
    http::StatusCode,
    routing::{get, put},
};
use campus_api_types::{CreatedResponse, Person, PersonInput};
use campus_core::domain::{PersonDraft, StudentId};
use tracing::info;

use super::error::ApiResult;
use super::state::AppState;
use crate::repository::StudentRecord;

pub fn create_students_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/alunos", get(list_students).post(create_student))
        .route("/api/alunos/{id}", put(update_student).delete(delete_student))
}

impl From<StudentRecord> for Person {
    fn from(record: StudentRecord) -> Self {
        Self {
            id: record.id.into_inner(),
            name: record.name,
            email: record.email,
        }
    }
}

async fn list_students(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Person>>> {
    let students = state.students.list().await?;
    Ok(Json(students.into_iter().map(Person::from).collect()))
}

async fn create_student(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PersonInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let Json(input) = payload?;
    let draft = PersonDraft::new(input.name, input.email)?;

    let id = state.students.create(draft).await?;
    info!(student_id = %id, "student created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: id.into_inner(),
        }),
    ))
}

async fn update_student(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<PersonInput>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = path?;
    let Json(input) = payload?;
    let draft = PersonDraft::new(input.name, input.email)?;
    let id = StudentId::new(id);

    state.students.update(id, draft).await?;
    info!(student_id = %id, "student updated");

    Ok(StatusCode::NO_CONTENT)
}

async fn delete_student(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = path?;
    let id = StudentId::new(id);
    state.students.delete(id).await?;
    info!(student_id = %id, "student deleted");

    Ok(StatusCode::NO_CONTENT)
}
