use std::collections::HashSet;

use crate::entity::{subject, teaching_assignment};
use anyhow::Result;
use async_trait::async_trait;
use campus_core::domain::{CourseId, SubjectDraft, SubjectId};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, TransactionTrait, sea_query::Expr,
};

#[derive(Debug, Clone)]
pub struct SubjectRecord {
    pub id: SubjectId,
    pub name: String,
    pub course_id: CourseId,
}

impl From<subject::Model> for SubjectRecord {
    fn from(model: subject::Model) -> Self {
        Self {
            id: SubjectId::new(model.id),
            name: model.name,
            course_id: CourseId::new(model.course_id),
        }
    }
}

#[async_trait]
pub trait SubjectRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<SubjectRecord>>;
    async fn exists(&self, subject_id: SubjectId) -> Result<bool>;
    /// 返回 `subject_ids` 中不存在的 id。
    async fn missing(&self, subject_ids: &[SubjectId]) -> Result<Vec<SubjectId>>;
    async fn create(&self, draft: SubjectDraft) -> Result<SubjectId>;
    async fn update(&self, subject_id: SubjectId, draft: SubjectDraft) -> Result<()>;
    /// 删除科目及其授课记录。
    async fn delete(&self, subject_id: SubjectId) -> Result<()>;
}

#[derive(Clone)]
pub struct SeaOrmSubjectRepository {
    db: DatabaseConnection,
}

impl SeaOrmSubjectRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SubjectRepository for SeaOrmSubjectRepository {
    async fn list(&self) -> Result<Vec<SubjectRecord>> {
        let models = subject::Entity::find()
            .order_by_asc(subject::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(SubjectRecord::from).collect())
    }

    async fn exists(&self, subject_id: SubjectId) -> Result<bool> {
        let count = subject::Entity::find_by_id(subject_id.into_inner())
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    async fn missing(&self, subject_ids: &[SubjectId]) -> Result<Vec<SubjectId>> {
        if subject_ids.is_empty() {
            return Ok(Vec::new());
        }

        let found: HashSet<i32> = subject::Entity::find()
            .select_only()
            .column(subject::Column::Id)
            .filter(subject::Column::Id.is_in(subject_ids.iter().map(|id| id.into_inner())))
            .into_tuple::<i32>()
            .all(&self.db)
            .await?
            .into_iter()
            .collect();

        Ok(subject_ids
            .iter()
            .copied()
            .filter(|id| !found.contains(&id.into_inner()))
            .collect())
    }

    async fn create(&self, draft: SubjectDraft) -> Result<SubjectId> {
        let active_model = subject::ActiveModel {
            name: Set(draft.name.into_inner()),
            course_id: Set(draft.course_id.into_inner()),
            ..Default::default()
        };

        let result = subject::Entity::insert(active_model).exec(&self.db).await?;
        Ok(SubjectId::new(result.last_insert_id))
    }

    async fn update(&self, subject_id: SubjectId, draft: SubjectDraft) -> Result<()> {
        subject::Entity::update_many()
            .col_expr(subject::Column::Name, Expr::value(draft.name.into_inner()))
            .col_expr(
                subject::Column::CourseId,
                Expr::value(draft.course_id.into_inner()),
            )
            .filter(subject::Column::Id.eq(subject_id.into_inner()))
            .exec(&self.db)
            .await?;

        Ok(())
    }

    async fn delete(&self, subject_id: SubjectId) -> Result<()> {
        let id = subject_id.into_inner();
        let txn = self.db.begin().await?;

        teaching_assignment::Entity::delete_many()
            .filter(teaching_assignment::Column::SubjectId.eq(id))
            .exec(&txn)
            .await?;
        subject::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(())
    }
}
