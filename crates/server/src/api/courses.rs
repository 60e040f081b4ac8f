//! 课程 API 路由（`/api/cursos`）。

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::{JsonRejection, PathRejection}},
    http::StatusCode,
    routing::{get, put},
};
use campus_api_types::{Course, CourseInput, CreatedResponse};
use campus_core::domain::{CourseDraft, CourseId, TeacherId};
use tracing::info;

use super::error::{ApiError, ApiResult};
use super::state::AppState;
use crate::repository::CourseRecord;

pub fn create_courses_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/cursos", get(list_courses).post(create_course))
        .route("/api/cursos/{id}", put(update_course).delete(delete_course))
}

impl From<CourseRecord> for Course {
    fn from(record: CourseRecord) -> Self {
        Self {
            id: record.id.into_inner(),
            name: record.name,
            teacher_id: record.teacher_id.map(TeacherId::into_inner),
        }
    }
}

/// 校验请求体，并确认指定的教师存在。
async fn course_draft(state: &AppState, input: CourseInput) -> ApiResult<CourseDraft> {
    let draft = CourseDraft::new(input.name, input.teacher_id)?;

    if let Some(teacher_id) = draft.teacher_id
        && !state.teachers.exists(teacher_id).await?
    {
        return Err(ApiError::reference_not_found(format!(
            "teacher {teacher_id} does not exist"
        )));
    }

    Ok(draft)
}

async fn list_courses(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Course>>> {
    let courses = state.courses.list().await?;
    Ok(Json(courses.into_iter().map(Course::from).collect()))
}

async fn create_course(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CourseInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let Json(input) = payload?;
    let draft = course_draft(&state, input).await?;

    let id = state.courses.create(draft).await?;
    info!(course_id = %id, "course created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: id.into_inner(),
        }),
    ))
}

async fn update_course(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<CourseInput>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = path?;
    let Json(input) = payload?;
    let draft = course_draft(&state, input).await?;
    let id = CourseId::new(id);

    state.courses.update(id, draft).await?;
    info!(course_id = %id, "course updated");

    Ok(StatusCode::NO_CONTENT)
}

async fn delete_course(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = path?;
    let id = CourseId::new(id);
    state.courses.delete(id).await?;
    info!(course_id = %id, "course deleted with its subjects and enrollments");

    Ok(StatusCode::NO_CONTENT)
}
