use crate::server::{
    data::{engagement::EngagementRepository, resource::ResourceRepository},
    model::resource::ResourceKind,
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod flags;
mod like;
mod record_view;
mod unlike;

/// Counts like rows for a resource.
async fn like_rows(
    db: &sea_orm::DatabaseConnection,
    kind: ResourceKind,
    resource_id: i32,
) -> Result<u64, DbErr> {
    entity::prelude::Like::find()
        .filter(entity::like::Column::ResourceType.eq(kind.as_str()))
        .filter(entity::like::Column::ResourceId.eq(resource_id))
        .count(db)
        .await
}
