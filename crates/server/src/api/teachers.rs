//! 教师 API 路由（`/api/professores`）。
//!
//! 与学生路由约定一致。删除教师后，其负责的课程变为未分配。

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::{JsonRejection, PathRejection}},
    http::StatusCode,
    routing::{get, put},
};
use campus_api_types::{CreatedResponse, Person, PersonInput};
use campus_core::domain::{PersonDraft, TeacherId};
use tracing::info;

use super::error::ApiResult;
use super::state::AppState;
use crate::repository::TeacherRecord;

pub fn create_teachers_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/professores", get(list_teachers).post(create_teacher))
        .route("/api/professores/{id}", put(update_teacher).delete(delete_teacher))
}

impl From<TeacherRecord> for Person {
    fn from(record: TeacherRecord) -> Self {
        Self {
            id: record.id.into_inner(),
            name: record.name,
            email: record.email,
        }
    }
}

async fn list_teachers(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Person>>> {
    let teachers = state.teachers.list().await?;
    Ok(Json(teachers.into_iter().map(Person::from).collect()))
}

async fn create_teacher(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PersonInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let Json(input) = payload?;
    let draft = PersonDraft::new(input.name, input.email)?;

    let id = state.teachers.create(draft).await?;
    info!(teacher_id = %id, "teacher created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: id.into_inner(),
        }),
    ))
}

async fn update_teacher(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<PersonInput>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = path?;
    let Json(input) = payload?;
    let draft = PersonDraft::new(input.name, input.email)?;
    let id = TeacherId::new(id);

    state.teachers.update(id, draft).await?;
    info!(teacher_id = %id, "teacher updated");

    Ok(StatusCode::NO_CONTENT)
}

async fn delete_teacher(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = path?;
    let id = TeacherId::new(id);
    state.teachers.delete(id).await?;
    info!(teacher_id = %id, "teacher deleted, owned courses unassigned");

    Ok(StatusCode::NO_CONTENT)
}
