//! 存储访问层：每张表一个 trait，以及对应的 sea-orm 实现。

mod course_repository;
mod enrollment_repository;
mod student_repository;
mod subject_repository;
mod teacher_repository;
mod teaching_repository;

pub use course_repository::{CourseRecord, CourseRepository, SeaOrmCourseRepository};
pub use enrollment_repository::{EnrollmentRepository, SeaOrmEnrollmentRepository};
pub use student_repository::{SeaOrmStudentRepository, StudentRecord, StudentRepository};
pub use subject_repository::{SeaOrmSubjectRepository, SubjectRecord, SubjectRepository};
pub use teacher_repository::{SeaOrmTeacherRepository, TeacherRecord, TeacherRepository};
pub use teaching_repository::{
    SeaOrmTeachingRepository, TeacherSubjectRecord, TeachingRepository,
};

use sea_orm::{DbErr, SqlErr};

/// 判断仓储错误是否由唯一索引冲突引起。
pub fn is_unique_violation(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<DbErr>().and_then(|db_err| db_err.sql_err()),
        Some(SqlErr::UniqueConstraintViolation(_))
    )
}
