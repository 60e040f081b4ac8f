use sea_orm_migration::prelude::*;
use sea_orm_migration::schema::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Teacher::Table)
                    .if_not_exists()
                    .col(pk_auto(Teacher::Id))
                    .col(string_len(Teacher::Name, 255))
                    .col(string_len(Teacher::Email, 255))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(pk_auto(Course::Id))
                    .col(string_len(Course::Name, 255))
                    // No foreign key: the API checks the teacher exists before writing.
                    .col(integer_null(Course::TeacherId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::Id))
                    .col(string_len(Student::Name, 255))
                    .col(string_len(Student::Email, 255))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Subject::Table)
                    .if_not_exists()
                    .col(pk_auto(Subject::Id))
                    .col(string_len(Subject::Name, 255))
                    .col(integer(Subject::CourseId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Enrollment::Table)
                    .if_not_exists()
                    .col(pk_auto(Enrollment::Id))
                    .col(integer(Enrollment::StudentId))
                    .col(integer(Enrollment::CourseId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TeachingAssignment::Table)
                    .if_not_exists()
                    .col(pk_auto(TeachingAssignment::Id))
                    .col(integer(TeachingAssignment::TeacherId))
                    .col(integer(TeachingAssignment::SubjectId))
                    .to_owned(),
            )
            .await?;

        // Duplicate associations surface as unique-constraint violations,
        // which the API reports as conflicts.
        manager
            .create_index(
                Index::create()
                    .name("idx_curso_aluno_pair")
                    .table(Enrollment::Table)
                    .col(Enrollment::StudentId)
                    .col(Enrollment::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_curso_aluno_curso_id")
                    .table(Enrollment::Table)
                    .col(Enrollment::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_professor_disciplina_pair")
                    .table(TeachingAssignment::Table)
                    .col(TeachingAssignment::TeacherId)
                    .col(TeachingAssignment::SubjectId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_professor_disciplina_disciplina_id")
                    .table(TeachingAssignment::Table)
                    .col(TeachingAssignment::SubjectId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_disciplinas_curso_id")
                    .table(Subject::Table)
                    .col(Subject::CourseId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeachingAssignment::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Enrollment::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Subject::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Teacher::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Teacher {
    #[sea_orm(iden = "professores")]
    Table,
    Id,
    #[sea_orm(iden = "nome")]
    Name,
    Email,
}

#[derive(DeriveIden)]
enum Course {
    #[sea_orm(iden = "cursos")]
    Table,
    Id,
    #[sea_orm(iden = "nome")]
    Name,
    #[sea_orm(iden = "professor_id")]
    TeacherId,
}

#[derive(DeriveIden)]
enum Student {
    #[sea_orm(iden = "alunos")]
    Table,
    Id,
    #[sea_orm(iden = "nome")]
    Name,
    Email,
}

#[derive(DeriveIden)]
enum Subject {
    #[sea_orm(iden = "disciplinas")]
    Table,
    Id,
    #[sea_orm(iden = "nome")]
    Name,
    #[sea_orm(iden = "curso_id")]
    CourseId,
}

#[derive(DeriveIden)]
enum Enrollment {
    #[sea_orm(iden = "curso_aluno")]
    Table,
    Id,
    #[sea_orm(iden = "aluno_id")]
    StudentId,
    #[sea_orm(iden = "curso_id")]
    CourseId,
}

#[derive(DeriveIden)]
enum TeachingAssignment {
    #[sea_orm(iden = "professor_disciplina")]
    Table,
    Id,
    #[sea_orm(iden = "professor_id")]
    TeacherId,
    #[sea_orm(iden = "disciplina_id")]
    SubjectId,
}
