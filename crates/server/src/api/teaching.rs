//! 教师与科目关联 API 路由（`/api/professor_disciplina`）。

use std::collections::BTreeSet;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::{JsonRejection, PathRejection}},
    http::StatusCode,
    routing::{delete, get, post},
};
use campus_api_types::{CreatedResponse, MemberIds, Person, TeacherSubject, TeachingAssignmentInput};
use campus_core::domain::{AssociationDraft, SubjectId, TeacherId};
use tracing::info;

use super::error::{ApiError, ApiResult};
use super::state::AppState;
use crate::repository::{TeacherSubjectRecord, is_unique_violation};

pub fn create_teaching_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/professor_disciplina", post(create_assignment))
        .route(
            "/api/professor_disciplina/professor/{teacher_id}",
            get(list_subjects_of_teacher).put(replace_subjects_of_teacher),
        )
        .route(
            "/api/professor_disciplina/disciplina/{subject_id}",
            get(list_teachers_of_subject),
        )
        .route(
            "/api/professor_disciplina/{teacher_id}/{subject_id}",
            delete(delete_assignment),
        )
}

impl From<TeacherSubjectRecord> for TeacherSubject {
    fn from(record: TeacherSubjectRecord) -> Self {
        Self {
            id: record.subject.id.into_inner(),
            name: record.subject.name,
            course_id: record.subject.course_id.into_inner(),
            course_name: record.course_name,
        }
    }
}

async fn ensure_teacher(state: &AppState, teacher_id: TeacherId) -> ApiResult<()> {
    if state.teachers.exists(teacher_id).await? {
        Ok(())
    } else {
        Err(ApiError::reference_not_found(format!(
            "teacher {teacher_id} does not exist"
        )))
    }
}

async fn ensure_subjects(state: &AppState, subject_ids: &[SubjectId]) -> ApiResult<()> {
    let missing = state.subjects.missing(subject_ids).await?;
    if missing.is_empty() {
        return Ok(());
    }

    let ids = missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    Err(ApiError::reference_not_found(format!(
        "subject(s) {ids} do not exist"
    )))
}

async fn list_subjects_of_teacher(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<Vec<TeacherSubject>>> {
    let Path(teacher_id) = path?;
    let subjects = state
        .teaching
        .subjects_of_teacher(TeacherId::new(teacher_id))
        .await?;

    Ok(Json(subjects.into_iter().map(TeacherSubject::from).collect()))
}

async fn list_teachers_of_subject(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<Vec<Person>>> {
    let Path(subject_id) = path?;
    let teachers = state
        .teaching
        .teachers_of_subject(SubjectId::new(subject_id))
        .await?;

    Ok(Json(teachers.into_iter().map(Person::from).collect()))
}

async fn create_assignment(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TeachingAssignmentInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let Json(input) = payload?;
    let draft = AssociationDraft::teaching(input.teacher_id, input.subject_id)?;
    ensure_teacher(&state, draft.left).await?;
    ensure_subjects(&state, &[draft.right]).await?;

    match state.teaching.create(draft).await {
        Ok(id) => {
            info!(teacher_id = %draft.left, subject_id = %draft.right, "subject assigned");
            Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
        }
        Err(err) if is_unique_violation(&err) => Err(ApiError::conflict(
            "teacher already teaches this subject",
        )),
        Err(err) => Err(err.into()),
    }
}

async fn replace_subjects_of_teacher(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<MemberIds>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Path(teacher_id) = path?;
    let Json(members) = payload?;
    let teacher_id = TeacherId::new(teacher_id);
    let subject_ids: Vec<SubjectId> = members
        .ids
        .into_iter()
        .map(|id| SubjectId::required(Some(id)))
        .collect::<Result<BTreeSet<_>, _>>()?
        .into_iter()
        .collect();

    ensure_teacher(&state, teacher_id).await?;
    ensure_subjects(&state, &subject_ids).await?;

    state
        .teaching
        .replace_subjects_of_teacher(teacher_id, &subject_ids)
        .await?;
    info!(teacher_id = %teacher_id, subjects = subject_ids.len(), "teaching assignments replaced");

    Ok(StatusCode::NO_CONTENT)
}

async fn delete_assignment(
    State(state): State<Arc<AppState>>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path((teacher_id, subject_id)) = path?;
    state
        .teaching
        .delete(TeacherId::new(teacher_id), SubjectId::new(subject_id))
        .await?;
    info!(teacher_id, subject_id, "teaching assignment removed");

    Ok(StatusCode::NO_CONTENT)
}
