use std::collections::HashSet;

use crate::entity::{course, enrollment, subject, teaching_assignment};
use anyhow::Result;
use async_trait::async_trait;
use campus_core::domain::{CourseDraft, CourseId, TeacherId};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, TransactionTrait, sea_query::Expr,
};

#[derive(Debug, Clone)]
pub struct CourseRecord {
    pub id: CourseId,
    pub name: String,
    pub teacher_id: Option<TeacherId>,
}

impl From<course::Model> for CourseRecord {
    fn from(model: course::Model) -> Self {
        Self {
            id: CourseId::new(model.id),
            name: model.name,
            teacher_id: model.teacher_id.map(TeacherId::new),
        }
    }
}

#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<CourseRecord>>;
    async fn exists(&self, course_id: CourseId) -> Result<bool>;
    /// 返回 `course_ids` 中不存在的 id。
    async fn missing(&self, course_ids: &[CourseId]) -> Result<Vec<CourseId>>;
    async fn create(&self, draft: CourseDraft) -> Result<CourseId>;
    async fn update(&self, course_id: CourseId, draft: CourseDraft) -> Result<()>;
    /// 删除课程，连同其选课记录、所属科目及科目的授课记录。
    async fn delete(&self, course_id: CourseId) -> Result<()>;
}

#[derive(Clone)]
pub struct SeaOrmCourseRepository {
    db: DatabaseConnection,
}

impl SeaOrmCourseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CourseRepository for SeaOrmCourseRepository {
    async fn list(&self) -> Result<Vec<CourseRecord>> {
        let models = course::Entity::find()
            .order_by_asc(course::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(CourseRecord::from).collect())
    }

    async fn exists(&self, course_id: CourseId) -> Result<bool> {
        let count = course::Entity::find_by_id(course_id.into_inner())
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    async fn missing(&self, course_ids: &[CourseId]) -> Result<Vec<CourseId>> {
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        let found: HashSet<i32> = course::Entity::find()
            .select_only()
            .column(course::Column::Id)
            .filter(course::Column::Id.is_in(course_ids.iter().map(|id| id.into_inner())))
            .into_tuple::<i32>()
            .all(&self.db)
            .await?
            .into_iter()
            .collect();

        Ok(course_ids
            .iter()
            .copied()
            .filter(|id| !found.contains(&id.into_inner()))
            .collect())
    }

    async fn create(&self, draft: CourseDraft) -> Result<CourseId> {
        let active_model = course::ActiveModel {
            name: Set(draft.name.into_inner()),
            teacher_id: Set(draft.teacher_id.map(TeacherId::into_inner)),
            ..Default::default()
        };

        let result = course::Entity::insert(active_model).exec(&self.db).await?;
        Ok(CourseId::new(result.last_insert_id))
    }

    async fn update(&self, course_id: CourseId, draft: CourseDraft) -> Result<()> {
        course::Entity::update_many()
            .col_expr(course::Column::Name, Expr::value(draft.name.into_inner()))
            .col_expr(
                course::Column::TeacherId,
                Expr::value(draft.teacher_id.map(TeacherId::into_inner)),
            )
            .filter(course::Column::Id.eq(course_id.into_inner()))
            .exec(&self.db)
            .await?;

        Ok(())
    }

    async fn delete(&self, course_id: CourseId) -> Result<()> {
        let id = course_id.into_inner();
        let txn = self.db.begin().await?;

        let subject_ids: Vec<i32> = subject::Entity::find()
            .select_only()
            .column(subject::Column::Id)
            .filter(subject::Column::CourseId.eq(id))
            .into_tuple::<i32>()
            .all(&txn)
            .await?;

        if !subject_ids.is_empty() {
            teaching_assignment::Entity::delete_many()
                .filter(teaching_assignment::Column::SubjectId.is_in(subject_ids))
                .exec(&txn)
                .await?;
        }
        subject::Entity::delete_many()
            .filter(subject::Column::CourseId.eq(id))
            .exec(&txn)
            .await?;
        enrollment::Entity::delete_many()
            .filter(enrollment::Column::CourseId.eq(id))
            .exec(&txn)
            .await?;
        course::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(())
    }
}
