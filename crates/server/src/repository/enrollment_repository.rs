use super::{CourseRecord, StudentRecord};
use crate::entity::{course, enrollment, student};
use anyhow::Result;
use async_trait::async_trait;
use campus_core::domain::{AssociationDraft, CourseId, StudentId};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, TransactionTrait,
};

#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    async fn courses_of_student(&self, student_id: StudentId) -> Result<Vec<CourseRecord>>;
    async fn students_of_course(&self, course_id: CourseId) -> Result<Vec<StudentRecord>>;
    /// 该组合已存在时返回唯一约束冲突错误。
    async fn create(&self, draft: AssociationDraft<StudentId, CourseId>) -> Result<i32>;
    async fn delete(&self, student_id: StudentId, course_id: CourseId) -> Result<()>;
    /// 在一个事务内把学生的选课集合替换为 `course_ids`。
    async fn replace_courses_of_student(
        &self,
        student_id: StudentId,
        course_ids: &[CourseId],
    ) -> Result<()>;
}

#[derive(Clone)]
pub struct SeaOrmEnrollmentRepository {
    db: DatabaseConnection,
}

impl SeaOrmEnrollmentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EnrollmentRepository for SeaOrmEnrollmentRepository {
    async fn courses_of_student(&self, student_id: StudentId) -> Result<Vec<CourseRecord>> {
        let models = course::Entity::find()
            .join(JoinType::InnerJoin, course::Relation::Enrollment.def())
            .filter(enrollment::Column::StudentId.eq(student_id.into_inner()))
            .order_by_asc(course::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(CourseRecord::from).collect())
    }

    async fn students_of_course(&self, course_id: CourseId) -> Result<Vec<StudentRecord>> {
        let models = student::Entity::find()
            .join(JoinType::InnerJoin, student::Relation::Enrollment.def())
            .filter(enrollment::Column::CourseId.eq(course_id.into_inner()))
            .order_by_asc(student::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(StudentRecord::from).collect())
    }

    async fn create(&self, draft: AssociationDraft<StudentId, CourseId>) -> Result<i32> {
        let active_model = enrollment::ActiveModel {
            student_id: Set(draft.left.into_inner()),
            course_id: Set(draft.right.into_inner()),
            ..Default::default()
        };

        let result = enrollment::Entity::insert(active_model)
            .exec(&self.db)
            .await?;
        Ok(result.last_insert_id)
    }

    async fn delete(&self, student_id: StudentId, course_id: CourseId) -> Result<()> {
        enrollment::Entity::delete_many()
            .filter(enrollment::Column::StudentId.eq(student_id.into_inner()))
            .filter(enrollment::Column::CourseId.eq(course_id.into_inner()))
            .exec(&self.db)
            .await?;

        Ok(())
    }

    async fn replace_courses_of_student(
        &self,
        student_id: StudentId,
        course_ids: &[CourseId],
    ) -> Result<()> {
        let txn = self.db.begin().await?;

        enrollment::Entity::delete_many()
            .filter(enrollment::Column::StudentId.eq(student_id.into_inner()))
            .exec(&txn)
            .await?;

        let rows: Vec<enrollment::ActiveModel> = course_ids
            .iter()
            .map(|course_id| enrollment::ActiveModel {
                student_id: Set(student_id.into_inner()),
                course_id: Set(course_id.into_inner()),
                ..Default::default()
            })
            .collect();
        if !rows.is_empty() {
            enrollment::Entity::insert_many(rows).exec(&txn).await?;
        }

        txn.commit().await?;
        Ok(())
    }
}
