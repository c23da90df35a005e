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
                    .table(ResourceStatusLog::Table)
                    .if_not_exists()
                    .col(pk_auto(ResourceStatusLog::Id))
                    .col(string_len(ResourceStatusLog::ResourceType, 16))
                    .col(integer(ResourceStatusLog::ResourceId))
                    .col(integer(ResourceStatusLog::OperatorId))
                    .col(string_len(ResourceStatusLog::OldStatus, 16))
                    .col(string_len(ResourceStatusLog::NewStatus, 16))
                    .col(text_null(ResourceStatusLog::Reason))
                    .col(
                        timestamp(ResourceStatusLog::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_resource_status_logs_operator_id")
                            .from(ResourceStatusLog::Table, ResourceStatusLog::OperatorId)
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
            .drop_table(Table::drop().table(ResourceStatusLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ResourceStatusLog {
    #[sea_orm(iden = "resource_status_logs")]
    Table,
    Id,
    ResourceType,
    ResourceId,
    OperatorId,
    OldStatus,
    NewStatus,
    Reason,
    CreatedAt,
}
