use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(pk_auto(Course::Id))
                    .col(string(Course::Name))
                    .col(string_len(Course::Semester, 32))
                    .col(double(Course::Credit).default(0.0))
                    .col(string_null(Course::Cover))
                    .col(string_len(Course::Status, 16).default("pending"))
                    .col(integer(Course::SubmitterId))
                    .col(integer(Course::Views).default(0))
                    .col(integer(Course::Loves).default(0))
                    .col(integer(Course::Collections).default(0))
                    .col(text_null(Course::RejectReason))
                    .col(timestamp_null(Course::AuditTime))
                    .col(
                        timestamp(Course::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Course::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_courses_submitter_id")
                            .from(Course::Table, Course::SubmitterId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_courses_status_semester")
                    .table(Course::Table)
                    .col(Course::Status)
                    .col(Course::Semester)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CourseTeacher::Table)
                    .if_not_exists()
                    .col(pk_auto(CourseTeacher::Id))
                    .col(integer(CourseTeacher::CourseId))
                    .col(string(CourseTeacher::Name))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_teachers_course_id")
                            .from(CourseTeacher::Table, CourseTeacher::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CourseCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(CourseCategory::Id))
                    .col(integer(CourseCategory::CourseId))
                    .col(string_len(CourseCategory::Category, 64))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_categories_course_id")
                            .from(CourseCategory::Table, CourseCategory::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CourseResource::Table)
                    .if_not_exists()
                    .col(pk_auto(CourseResource::Id))
                    .col(integer(CourseResource::CourseId))
                    .col(string_len(CourseResource::Kind, 16))
                    .col(string(CourseResource::Title))
                    .col(text_null(CourseResource::Description))
                    .col(string(CourseResource::Url))
                    .col(integer(CourseResource::UploaderId))
                    .col(
                        timestamp(CourseResource::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_resources_course_id")
                            .from(CourseResource::Table, CourseResource::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_resources_uploader_id")
                            .from(CourseResource::Table, CourseResource::UploaderId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CourseResource::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseCategory::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseTeacher::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Course {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    Name,
    Semester,
    Credit,
    Cover,
    Status,
    SubmitterId,
    Views,
    Loves,
    Collections,
    RejectReason,
    AuditTime,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum CourseTeacher {
    #[sea_orm(iden = "course_teachers")]
    Table,
    Id,
    CourseId,
    Name,
}

#[derive(DeriveIden)]
pub enum CourseCategory {
    #[sea_orm(iden = "course_categories")]
    Table,
    Id,
    CourseId,
    Category,
}

#[derive(DeriveIden)]
pub enum CourseResource {
    #[sea_orm(iden = "course_resources")]
    Table,
    Id,
    CourseId,
    Kind,
    Title,
    Description,
    Url,
    UploaderId,
    CreatedAt,
}
