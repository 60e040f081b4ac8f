//! 科目 API 路由（`/api/disciplinas`）。

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::{JsonRejection, PathRejection}},
    http::StatusCode,
    routing::{get, put},
};
use campus_api_types::{CreatedResponse, Subject, SubjectInput};
use campus_core::domain::{SubjectDraft, SubjectId};
use tracing::info;

use super::error::{ApiError, ApiResult};
use super::state::AppState;
use crate::repository::SubjectRecord;

pub fn create_subjects_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/disciplinas", get(list_subjects).post(create_subject))
        .route(
            "/api/disciplinas/{id}",
            put(update_subject).delete(delete_subject),
        )
}

impl From<SubjectRecord> for Subject {
    fn from(record: SubjectRecord) -> Self {
        Self {
            id: record.id.into_inner(),
            name: record.name,
            course_id: record.course_id.into_inner(),
        }
    }
}

async fn subject_draft(state: &AppState, input: SubjectInput) -> ApiResult<SubjectDraft> {
    let draft = SubjectDraft::new(input.name, input.course_id)?;

    if !state.courses.exists(draft.course_id).await? {
        return Err(ApiError::reference_not_found(format!(
            "course {} does not exist",
            draft.course_id
        )));
    }

    Ok(draft)
}

async fn list_subjects(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Subject>>> {
    let subjects = state.subjects.list().await?;
    Ok(Json(subjects.into_iter().map(Subject::from).collect()))
}

async fn create_subject(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SubjectInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let Json(input) = payload?;
    let draft = subject_draft(&state, input).await?;

    let id = state.subjects.create(draft).await?;
    info!(subject_id = %id, "subject created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: id.into_inner(),
        }),
    ))
}

async fn update_subject(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<SubjectInput>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = path?;
    let Json(input) = payload?;
    let draft = subject_draft(&state, input).await?;
    let id = SubjectId::new(id);

    state.subjects.update(id, draft).await?;
    info!(subject_id = %id, "subject updated");

    Ok(StatusCode::NO_CONTENT)
}

async fn delete_subject(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = path?;
    let id = SubjectId::new(id);
    state.subjects.delete(id).await?;
    info!(subject_id = %id, "subject deleted");

    Ok(StatusCode::NO_CONTENT)
}
