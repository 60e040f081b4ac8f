//! 统一的应用状态。

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::repository::{
    CourseRepository, EnrollmentRepository, SeaOrmCourseRepository, SeaOrmEnrollmentRepository,
    SeaOrmStudentRepository, SeaOrmSubjectRepository, SeaOrmTeacherRepository,
    SeaOrmTeachingRepository, StudentRepository, SubjectRepository, TeacherRepository,
    TeachingRepository,
};

/// 所有路由共享的仓储集合。
#[derive(Clone)]
pub struct AppState {
    pub courses: Arc<dyn CourseRepository>,
    pub students: Arc<dyn StudentRepository>,
    pub teachers: Arc<dyn TeacherRepository>,
    pub subjects: Arc<dyn SubjectRepository>,
    pub enrollments: Arc<dyn EnrollmentRepository>,
    pub teaching: Arc<dyn TeachingRepository>,
}

impl AppState {
    /// 基于同一个连接池创建 sea-orm 仓储。
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            courses: Arc::new(SeaOrmCourseRepository::new(db.clone())),
            students: Arc::new(SeaOrmStudentRepository::new(db.clone())),
            teachers: Arc::new(SeaOrmTeacherRepository::new(db.clone())),
            subjects: Arc::new(SeaOrmSubjectRepository::new(db.clone())),
            enrollments: Arc::new(SeaOrmEnrollmentRepository::new(db.clone())),
            teaching: Arc::new(SeaOrmTeachingRepository::new(db)),
        }
    }
}
