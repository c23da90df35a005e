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
                    .table(Project::Table)
                    .if_not_exists()
                    .col(pk_auto(Project::Id))
                    .col(string(Project::Name))
                    .col(text(Project::Description))
                    .col(text(Project::Detail))
                    .col(string_null(Project::Github))
                    .col(string(Project::Category))
                    .col(string_null(Project::Cover))
                    .col(string_len(Project::Status, 16).default("pending"))
                    .col(integer(Project::SubmitterId))
                    .col(integer(Project::Views).default(0))
                    .col(integer(Project::Loves).default(0))
                    .col(integer(Project::Collections).default(0))
                    .col(text_null(Project::RejectReason))
                    .col(timestamp_null(Project::AuditTime))
                    .col(
                        timestamp(Project::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Project::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_projects_submitter_id")
                            .from(Project::Table, Project::SubmitterId)
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
                    .name("idx_projects_status")
                    .table(Project::Table)
                    .col(Project::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProjectTech::Table)
                    .if_not_exists()
                    .col(pk_auto(ProjectTech::Id))
                    .col(integer(ProjectTech::ProjectId))
                    .col(string_len(ProjectTech::Tech, 64))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_tech_stack_project_id")
                            .from(ProjectTech::Table, ProjectTech::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProjectImage::Table)
                    .if_not_exists()
                    .col(pk_auto(ProjectImage::Id))
                    .col(integer(ProjectImage::ProjectId))
                    .col(string(ProjectImage::ImageUrl))
                    .col(integer(ProjectImage::SortOrder).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_images_project_id")
                            .from(ProjectImage::Table, ProjectImage::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProjectAuthor::Table)
                    .if_not_exists()
                    .col(pk_auto(ProjectAuthor::Id))
                    .col(integer(ProjectAuthor::ProjectId))
                    .col(integer(ProjectAuthor::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_authors_project_id")
                            .from(ProjectAuthor::Table, ProjectAuthor::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_authors_user_id")
                            .from(ProjectAuthor::Table, ProjectAuthor::UserId)
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
            .drop_table(Table::drop().table(ProjectAuthor::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProjectImage::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProjectTech::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Project::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Project {
    #[sea_orm(iden = "projects")]
    Table,
    Id,
    Name,
    Description,
    Detail,
    Github,
    Category,
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
pub enum ProjectTech {
    #[sea_orm(iden = "project_tech_stack")]
    Table,
    Id,
    ProjectId,
    Tech,
}

#[derive(DeriveIden)]
pub enum ProjectImage {
    #[sea_orm(iden = "project_images")]
    Table,
    Id,
    ProjectId,
    ImageUrl,
    SortOrder,
}

#[derive(DeriveIden)]
pub enum ProjectAuthor {
    #[sea_orm(iden = "project_authors")]
    Table,
    Id,
    ProjectId,
    UserId,
}
