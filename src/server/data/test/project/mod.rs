use crate::server::{
    data::project::ProjectRepository,
    model::{
        project::{ProjectFields, ProjectListFilter},
        resource::{CursorPage, ListSort},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod list;
mod update;

fn fields() -> ProjectFields {
    ProjectFields {
        name: "Campus Map".to_string(),
        description: "an interactive map".to_string(),
        detail: String::new(),
        github: Some("https://github.com/example/map".to_string()),
        category: "web".to_string(),
        tech_stack: vec!["rust".to_string(), "svelte".to_string()],
        images: vec![
            "/uploads/images/2025/02/cover.png".to_string(),
            "/uploads/images/2025/02/second.png".to_string(),
        ],
    }
}
