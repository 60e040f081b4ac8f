use crate::entity::{course, teacher, teaching_assignment};
use anyhow::Result;
use async_trait::async_trait;
use campus_core::domain::{PersonDraft, TeacherId};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, TransactionTrait, sea_query::Expr,
};

#[derive(Debug, Clone)]
pub struct TeacherRecord {
    pub id: TeacherId,
    pub name: String,
    pub email: String,
}

impl From<teacher::Model> for TeacherRecord {
    fn from(model: teacher::Model) -> Self {
        Self {
            id: TeacherId::new(model.id),
            name: model.name,
            email: model.email,
        }
    }
}

#[async_trait]
pub trait TeacherRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<TeacherRecord>>;
    async fn exists(&self, teacher_id: TeacherId) -> Result<bool>;
    async fn create(&self, draft: PersonDraft) -> Result<TeacherId>;
    async fn update(&self, teacher_id: TeacherId, draft: PersonDraft) -> Result<()>;
    /// 删除教师及其授课记录，其负责的课程变为未分配。
    async fn delete(&self, teacher_id: TeacherId) -> Result<()>;
}

#[derive(Clone)]
pub struct SeaOrmTeacherRepository {
    db: DatabaseConnection,
}

impl SeaOrmTeacherRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TeacherRepository for SeaOrmTeacherRepository {
    async fn list(&self) -> Result<Vec<TeacherRecord>> {
        let models = teacher::Entity::find()
            .order_by_asc(teacher::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(TeacherRecord::from).collect())
    }

    async fn exists(&self, teacher_id: TeacherId) -> Result<bool> {
        let count = teacher::Entity::find_by_id(teacher_id.into_inner())
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    async fn create(&self, draft: PersonDraft) -> Result<TeacherId> {
        let active_model = teacher::ActiveModel {
            name: Set(draft.name.into_inner()),
            email: Set(draft.email.into_inner()),
            ..Default::default()
        };

        let result = teacher::Entity::insert(active_model).exec(&self.db).await?;
        Ok(TeacherId::new(result.last_insert_id))
    }

    async fn update(&self, teacher_id: TeacherId, draft: PersonDraft) -> Result<()> {
        teacher::Entity::update_many()
            .col_expr(teacher::Column::Name, Expr::value(draft.name.into_inner()))
            .col_expr(teacher::Column::Email, Expr::value(draft.email.into_inner()))
            .filter(teacher::Column::Id.eq(teacher_id.into_inner()))
            .exec(&self.db)
            .await?;

        Ok(())
    }

    async fn delete(&self, teacher_id: TeacherId) -> Result<()> {
        let id = teacher_id.into_inner();
        let txn = self.db.begin().await?;

        teaching_assignment::Entity::delete_many()
            .filter(teaching_assignment::Column::TeacherId.eq(id))
            .exec(&txn)
            .await?;
        course::Entity::update_many()
            .col_expr(course::Column::TeacherId, Expr::value(Option::<i32>::None))
            .filter(course::Column::TeacherId.eq(id))
            .exec(&txn)
            .await?;
        teacher::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(())
    }
}
