//! 教务管理服务：通过 REST API 管理课程、学生、教师、科目及其关联。

pub mod api;
pub mod config;
pub mod db;
pub mod entity;
pub mod repository;

use std::sync::Arc;

use sea_orm::DatabaseConnection;

pub use api::{AppState, create_router};
pub use config::ServerConfig;

/// 基于给定数据库连接创建完整路由。
pub fn app(db: DatabaseConnection) -> axum::Router {
    create_router(Arc::new(AppState::new(db)))
}
