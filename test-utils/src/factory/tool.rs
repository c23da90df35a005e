//! Tool factory for creating test tool entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tools with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let tool = ToolFactory::new(&db, user.id)
///     .category("editor")
///     .views(12)
///     .build()
///     .await?;
/// ```
pub struct ToolFactory<'a> {
    db: &'a DatabaseConnection,
    submitter_id: i32,
    name: String,
    description: String,
    category: String,
    status: String,
    views: i32,
    loves: i32,
    collections: i32,
    created_at: DateTime<Utc>,
}

impl<'a> ToolFactory<'a> {
    /// Creates a new ToolFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Tool {id}"`
    /// - description: `"A tool for tests"`
    /// - category: `"devtools"`
    /// - status: `"approved"`
    /// - counters: `0`
    pub fn new(db: &'a DatabaseConnection, submitter_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            submitter_id,
            name: format!("Tool {}", id),
            description: "A tool for tests".to_string(),
            category: "devtools".to_string(),
            status: "approved".to_string(),
            views: 0,
            loves: 0,
            collections: 0,
            created_at: Utc::now(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the review status, one of `pending`, `approved` or `rejected`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn views(mut self, views: i32) -> Self {
        self.views = views;
        self
    }

    pub fn loves(mut self, loves: i32) -> Self {
        self.loves = loves;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the tool entity into the database.
    pub async fn build(self) -> Result<entity::tool::Model, DbErr> {
        entity::tool::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            link: ActiveValue::Set("https://example.com".to_string()),
            description: ActiveValue::Set(self.description),
            description_detail: ActiveValue::Set(String::new()),
            category: ActiveValue::Set(self.category),
            tool_type: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            submitter_id: ActiveValue::Set(self.submitter_id),
            views: ActiveValue::Set(self.views),
            loves: ActiveValue::Set(self.loves),
            collections: ActiveValue::Set(self.collections),
            reject_reason: ActiveValue::Set(None),
            audit_time: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an approved tool submitted by the given user.
pub async fn create_tool(
    db: &DatabaseConnection,
    submitter_id: i32,
) -> Result<entity::tool::Model, DbErr> {
    ToolFactory::new(db, submitter_id).build().await
}
