use crate::entity::{enrollment, student};
use anyhow::Result;
use async_trait::async_trait;
use campus_core::domain::{PersonDraft, StudentId};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, TransactionTrait, sea_query::Expr,
};

#[derive(Debug, Clone)]
pub struct StudentRecord {
    pub id: StudentId,
    pub name: String,
    pub email: String,
}

impl From<student::Model> for StudentRecord {
    fn from(model: student::Model) -> Self {
        Self {
            id: StudentId::new(model.id),
            name: model.name,
            email: model.email,
        }
    }
}

#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<StudentRecord>>;
    async fn exists(&self, student_id: StudentId) -> Result<bool>;
    async fn create(&self, draft: PersonDraft) -> Result<StudentId>;
    /// 覆盖整行字段。id 不存在时不做任何操作。
    async fn update(&self, student_id: StudentId, draft: PersonDraft) -> Result<()>;
    /// 删除学生及其全部选课记录。
    async fn delete(&self, student_id: StudentId) -> Result<()>;
}

#[derive(Clone)]
pub struct SeaOrmStudentRepository {
    db: DatabaseConnection,
}

impl SeaOrmStudentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StudentRepository for SeaOrmStudentRepository {
    async fn list(&self) -> Result<Vec<StudentRecord>> {
        let models = student::Entity::find()
            .order_by_asc(student::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(StudentRecord::from).collect())
    }

    async fn exists(&self, student_id: StudentId) -> Result<bool> {
        let count = student::Entity::find_by_id(student_id.into_inner())
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    async fn create(&self, draft: PersonDraft) -> Result<StudentId> {
        let active_model = student::ActiveModel {
            name: Set(draft.name.into_inner()),
            email: Set(draft.email.into_inner()),
            ..Default::default()
        };

        let result = student::Entity::insert(active_model).exec(&self.db).await?;
        Ok(StudentId::new(result.last_insert_id))
    }

    async fn update(&self, student_id: StudentId, draft: PersonDraft) -> Result<()> {
        student::Entity::update_many()
            .col_expr(student::Column::Name, Expr::value(draft.name.into_inner()))
            .col_expr(student::Column::Email, Expr::value(draft.email.into_inner()))
            .filter(student::Column::Id.eq(student_id.into_inner()))
            .exec(&self.db)
            .await?;

        Ok(())
    }

    async fn delete(&self, student_id: StudentId) -> Result<()> {
        let txn = self.db.begin().await?;

        enrollment::Entity::delete_many()
            .filter(enrollment::Column::StudentId.eq(student_id.into_inner()))
            .exec(&txn)
            .await?;
        student::Entity::delete_by_id(student_id.into_inner())
            .exec(&txn)
            .await?;

        txn.commit().await?;
        Ok(())
    }
}
