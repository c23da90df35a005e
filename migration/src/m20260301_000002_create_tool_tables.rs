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
                    .table(Tool::Table)
                    .if_not_exists()
                    .col(pk_auto(Tool::Id))
                    .col(string(Tool::Name))
                    .col(string(Tool::Link))
                    .col(text(Tool::Description))
                    .col(text(Tool::DescriptionDetail))
                    .col(string(Tool::Category))
                    .col(string_len_null(Tool::ToolType, 32))
                    .col(string_len(Tool::Status, 16).default("pending"))
                    .col(integer(Tool::SubmitterId))
                    .col(integer(Tool::Views).default(0))
                    .col(integer(Tool::Loves).default(0))
                    .col(integer(Tool::Collections).default(0))
                    .col(text_null(Tool::RejectReason))
                    .col(timestamp_null(Tool::AuditTime))
                    .col(
                        timestamp(Tool::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Tool::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tools_submitter_id")
                            .from(Tool::Table, Tool::SubmitterId)
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
                    .name("idx_tools_status")
                    .table(Tool::Table)
                    .col(Tool::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ToolTag::Table)
                    .if_not_exists()
                    .col(pk_auto(ToolTag::Id))
                    .col(integer(ToolTag::ToolId))
                    .col(string_len(ToolTag::Tag, 64))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tool_tags_tool_id")
                            .from(ToolTag::Table, ToolTag::ToolId)
                            .to(Tool::Table, Tool::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ToolImage::Table)
                    .if_not_exists()
                    .col(pk_auto(ToolImage::Id))
                    .col(integer(ToolImage::ToolId))
                    .col(string(ToolImage::ImageUrl))
                    .col(integer(ToolImage::SortOrder).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tool_images_tool_id")
                            .from(ToolImage::Table, ToolImage::ToolId)
                            .to(Tool::Table, Tool::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ToolContributor::Table)
                    .if_not_exists()
                    .col(pk_auto(ToolContributor::Id))
                    .col(integer(ToolContributor::ToolId))
                    .col(integer(ToolContributor::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tool_contributors_tool_id")
                            .from(ToolContributor::Table, ToolContributor::ToolId)
                            .to(Tool::Table, Tool::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tool_contributors_user_id")
                            .from(ToolContributor::Table, ToolContributor::UserId)
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
            .drop_table(Table::drop().table(ToolContributor::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ToolImage::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ToolTag::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tool::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Tool {
    #[sea_orm(iden = "tools")]
    Table,
    Id,
    Name,
    Link,
    Description,
    DescriptionDetail,
    Category,
    ToolType,
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
pub enum ToolTag {
    #[sea_orm(iden = "tool_tags")]
    Table,
    Id,
    ToolId,
    Tag,
}

#[derive(DeriveIden)]
pub enum ToolImage {
    #[sea_orm(iden = "tool_images")]
    Table,
    Id,
    ToolId,
    ImageUrl,
    SortOrder,
}

#[derive(DeriveIden)]
pub enum ToolContributor {
    #[sea_orm(iden = "tool_contributors")]
    Table,
    Id,
    ToolId,
    UserId,
}
