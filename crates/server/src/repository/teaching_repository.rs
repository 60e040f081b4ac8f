use super::{SubjectRecord, TeacherRecord};
use crate::entity::{course, subject, teacher, teaching_assignment};
use anyhow::Result;
use async_trait::async_trait;
use campus_core::domain::{AssociationDraft, SubjectId, TeacherId};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, TransactionTrait,
};

/// 教师所授的科目，附带所属课程名称（课程仍存在时）。
#[derive(Debug, Clone)]
pub struct TeacherSubjectRecord {
    pub subject: SubjectRecord,
    pub course_name: Option<String>,
}

#[async_trait]
pub trait TeachingRepository: Send + Sync {
    async fn subjects_of_teacher(&self, teacher_id: TeacherId)
    -> Result<Vec<TeacherSubjectRecord>>;
    async fn teachers_of_subject(&self, subject_id: SubjectId) -> Result<Vec<TeacherRecord>>;
    /// 该组合已存在时返回唯一约束冲突错误。
    async fn create(&self, draft: AssociationDraft<TeacherId, SubjectId>) -> Result<i32>;
    async fn delete(&self, teacher_id: TeacherId, subject_id: SubjectId) -> Result<()>;
    /// 在一个事务内把教师的授课科目集合替换为 `subject_ids`。
    async fn replace_subjects_of_teacher(
        &self,
        teacher_id: TeacherId,
        subject_ids: &[SubjectId],
    ) -> Result<()>;
}

#[derive(Clone)]
pub struct SeaOrmTeachingRepository {
    db: DatabaseConnection,
}

impl SeaOrmTeachingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TeachingRepository for SeaOrmTeachingRepository {
    async fn subjects_of_teacher(
        &self,
        teacher_id: TeacherId,
    ) -> Result<Vec<TeacherSubjectRecord>> {
        let rows = subject::Entity::find()
            .join(
                JoinType::InnerJoin,
                subject::Relation::TeachingAssignment.def(),
            )
            .filter(teaching_assignment::Column::TeacherId.eq(teacher_id.into_inner()))
            .find_also_related(course::Entity)
            .order_by_asc(subject::Column::Id)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(subject, course)| TeacherSubjectRecord {
                subject: SubjectRecord::from(subject),
                course_name: course.map(|course| course.name),
            })
            .collect())
    }

    async fn teachers_of_subject(&self, subject_id: SubjectId) -> Result<Vec<TeacherRecord>> {
        let models = teacher::Entity::find()
            .join(
                JoinType::InnerJoin,
                teacher::Relation::TeachingAssignment.def(),
            )
            .filter(teaching_assignment::Column::SubjectId.eq(subject_id.into_inner()))
            .order_by_asc(teacher::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(TeacherRecord::from).collect())
    }

    async fn create(&self, draft: AssociationDraft<TeacherId, SubjectId>) -> Result<i32> {
        let active_model = teaching_assignment::ActiveModel {
            teacher_id: Set(draft.left.into_inner()),
            subject_id: Set(draft.right.into_inner()),
            ..Default::default()
        };

        let result = teaching_assignment::Entity::insert(active_model)
            .exec(&self.db)
            .await?;
        Ok(result.last_insert_id)
    }

    async fn delete(&self, teacher_id: TeacherId, subject_id: SubjectId) -> Result<()> {
        teaching_assignment::Entity::delete_many()
            .filter(teaching_assignment::Column::TeacherId.eq(teacher_id.into_inner()))
            .filter(teaching_assignment::Column::SubjectId.eq(subject_id.into_inner()))
            .exec(&self.db)
            .await?;

        Ok(())
    }

    async fn replace_subjects_of_teacher(
        &self,
        teacher_id: TeacherId,
        subject_ids: &[SubjectId],
    ) -> Result<()> {
        let txn = self.db.begin().await?;

        teaching_assignment::Entity::delete_many()
            .filter(teaching_assignment::Column::TeacherId.eq(teacher_id.into_inner()))
            .exec(&txn)
            .await?;

        let rows: Vec<teaching_assignment::ActiveModel> = subject_ids
            .iter()
            .map(|subject_id| teaching_assignment::ActiveModel {
                teacher_id: Set(teacher_id.into_inner()),
                subject_id: Set(subject_id.into_inner()),
                ..Default::default()
            })
            .collect();
        if !rows.is_empty() {
            teaching_assignment::Entity::insert_many(rows)
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;
        Ok(())
    }
}
