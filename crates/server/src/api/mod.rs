//! API 路由模块。
//!
//! 每种资源一个路由，由 [`create_router`] 合并并挂载共享状态。

pub mod courses;
pub mod enrollments;
pub mod error;
pub mod state;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod teaching;

use std::sync::Arc;

use axum::{Json, Router, routing::get};
use campus_api_types::HealthCheckResponse;
use tower_http::trace::TraceLayer;

pub use courses::create_courses_router;
pub use enrollments::create_enrollments_router;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
pub use students::create_students_router;
pub use subjects::create_subjects_router;
pub use teachers::create_teachers_router;
pub use teaching::create_teaching_router;

/// 创建完整的 API 路由。
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .merge(create_courses_router())
        .merge(create_students_router())
        .merge(create_teachers_router())
        .merge(create_subjects_router())
        .merge(create_enrollments_router())
        .merge(create_teaching_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse::ok())
}
