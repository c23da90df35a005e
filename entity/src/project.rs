use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text")]
    pub detail: String,
    pub github: Option<String>,
    pub category: String,
    pub cover: Option<String>,
    pub status: String,
    pub submitter_id: i32,
    pub views: i32,
    pub loves: i32,
    pub collections: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub reject_reason: Option<String>,
    pub audit_time: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
