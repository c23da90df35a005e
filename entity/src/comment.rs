use sea_orm::entity::prelude::*;

/// Comment on a tool, course or project. Replies point at their top-level
/// comment through `parent_id`; nesting never goes deeper than one level.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub resource_type: String,
    pub resource_id: i32,
    pub parent_id: Option<i32>,
    pub user_id: i32,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub love_count: i32,
    pub reply_total: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
