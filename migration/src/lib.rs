pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_tool_tables;
mod m20260301_000003_create_course_tables;
mod m20260301_000004_create_project_tables;
mod m20260301_000005_create_comment_tables;
mod m20260301_000006_create_engagement_tables;
mod m20260301_000007_create_resource_status_log_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_tool_tables::Migration),
            Box::new(m20260301_000003_create_course_tables::Migration),
            Box::new(m20260301_000004_create_project_tables::Migration),
            Box::new(m20260301_000005_create_comment_tables::Migration),
            Box::new(m20260301_000006_create_engagement_tables::Migration),
            Box::new(m20260301_000007_create_resource_status_log_table::Migration),
        ]
    }
}
