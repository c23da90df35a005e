use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

/// Likes and collections share one shape: a user's mark on a resource,
/// unique per `(user_id, resource_type, resource_id)`.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Like::Table)
                    .if_not_exists()
                    .col(integer(Like::UserId))
                    .col(string_len(Like::ResourceType, 16))
                    .col(integer(Like::ResourceId))
                    .col(
                        timestamp(Like::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(Like::UserId)
                            .col(Like::ResourceType)
                            .col(Like::ResourceId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_likes_user_id")
                            .from(Like::Table, Like::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Collection::Table)
                    .if_not_exists()
                    .col(integer(Collection::UserId))
                    .col(string_len(Collection::ResourceType, 16))
                    .col(integer(Collection::ResourceId))
                    .col(
                        timestamp(Collection::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(Collection::UserId)
                            .col(Collection::ResourceType)
                            .col(Collection::ResourceId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_collections_user_id")
                            .from(Collection::Table, Collection::UserId)
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
            .drop_table(Table::drop().table(Collection::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Like::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Like {
    #[sea_orm(iden = "likes")]
    Table,
    UserId,
    ResourceType,
    ResourceId,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum Collection {
    #[sea_orm(iden = "collections")]
    Table,
    UserId,
    ResourceType,
    ResourceId,
    CreatedAt,
}
