use crate::server::{
    data::tool::ToolRepository,
    model::{
        resource::{CursorPage, ListSort},
        tool::{ToolFields, ToolListFilter},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod list;
mod search;
mod update;

fn fields(name: &str) -> ToolFields {
    ToolFields {
        name: name.to_string(),
        link: "https://example.com".to_string(),
        description: "finds things".to_string(),
        description_detail: String::new(),
        category: "devtools".to_string(),
        tool_type: None,
        tags: vec!["search".to_string(), "cli".to_string()],
        images: vec!["/uploads/images/2025/01/one.png".to_string()],
    }
}

fn filter() -> ToolListFilter {
    ToolListFilter {
        categories: Vec::new(),
        tags: Vec::new(),
        sort: ListSort::Newest,
        page: CursorPage::new(None, None),
    }
}
