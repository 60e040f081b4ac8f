//! 学生与课程关联 API 路由（`/api/curso_aluno`）。

use std::collections::BTreeSet;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::{JsonRejection, PathRejection}},
    http::StatusCode,
    routing::{delete, get, post},
};
use campus_api_types::{CourseSummary, CreatedResponse, EnrollmentInput, MemberIds, Person};
use campus_core::domain::{AssociationDraft, CourseId, StudentId};
use tracing::info;

use super::error::{ApiError, ApiResult};
use super::state::AppState;
use crate::repository::is_unique_violation;

pub fn create_enrollments_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/curso_aluno", post(create_enrollment))
        .route(
            "/api/curso_aluno/aluno/{student_id}",
            get(list_courses_of_student).put(replace_courses_of_student),
        )
        .route(
            "/api/curso_aluno/curso/{course_id}",
            get(list_students_of_course),
        )
        .route(
            "/api/curso_aluno/{student_id}/{course_id}",
            delete(delete_enrollment),
        )
}

async fn ensure_student(state: &AppState, student_id: StudentId) -> ApiResult<()> {
    if state.students.exists(student_id).await? {
        Ok(())
    } else {
        Err(ApiError::reference_not_found(format!(
            "student {student_id} does not exist"
        )))
    }
}

async fn ensure_courses(state: &AppState, course_ids: &[CourseId]) -> ApiResult<()> {
    let missing = state.courses.missing(course_ids).await?;
    if missing.is_empty() {
        return Ok(());
    }

    let ids = missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    Err(ApiError::reference_not_found(format!(
        "course(s) {ids} do not exist"
    )))
}

async fn list_courses_of_student(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<Vec<CourseSummary>>> {
    let Path(student_id) = path?;
    let courses = state
        .enrollments
        .courses_of_student(StudentId::new(student_id))
        .await?;

    Ok(Json(
        courses
            .into_iter()
            .map(|course| CourseSummary {
                id: course.id.into_inner(),
                name: course.name,
            })
            .collect(),
    ))
}

async fn list_students_of_course(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<Vec<Person>>> {
    let Path(course_id) = path?;
    let students = state
        .enrollments
        .students_of_course(CourseId::new(course_id))
        .await?;

    Ok(Json(students.into_iter().map(Person::from).collect()))
}

async fn create_enrollment(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<EnrollmentInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let Json(input) = payload?;
    let draft = AssociationDraft::enrollment(input.student_id, input.course_id)?;
    ensure_student(&state, draft.left).await?;
    ensure_courses(&state, &[draft.right]).await?;

    match state.enrollments.create(draft).await {
        Ok(id) => {
            info!(student_id = %draft.left, course_id = %draft.right, "student enrolled");
            Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
        }
        Err(err) if is_unique_violation(&err) => Err(ApiError::conflict(
            "student is already enrolled in this course",
        )),
        Err(err) => Err(err.into()),
    }
}

/// 在单个事务内替换学生的全部选课。
async fn replace_courses_of_student(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<MemberIds>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Path(student_id) = path?;
    let Json(members) = payload?;
    let student_id = StudentId::new(student_id);
    let course_ids: Vec<CourseId> = members
        .ids
        .into_iter()
        .map(|id| CourseId::required(Some(id)))
        .collect::<Result<BTreeSet<_>, _>>()?
        .into_iter()
        .collect();

    ensure_student(&state, student_id).await?;
    ensure_courses(&state, &course_ids).await?;

    state
        .enrollments
        .replace_courses_of_student(student_id, &course_ids)
        .await?;
    info!(student_id = %student_id, courses = course_ids.len(), "enrollments replaced");

    Ok(StatusCode::NO_CONTENT)
}

async fn delete_enrollment(
    State(state): State<Arc<AppState>>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path((student_id, course_id)) = path?;
    state
        .enrollments
        .delete(StudentId::new(student_id), CourseId::new(course_id))
        .await?;
    info!(student_id, course_id, "enrollment removed");

    Ok(StatusCode::NO_CONTENT)
}
