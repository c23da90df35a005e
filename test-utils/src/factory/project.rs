//! Project factory for creating test project entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test projects with customizable fields.
///
/// Only the project row is inserted. Use `helpers::add_project_author` when a test needs
/// the submitter listed as an author.
pub struct ProjectFactory<'a> {
    db: &'a DatabaseConnection,
    submitter_id: i32,
    name: String,
    category: String,
    status: String,
}

impl<'a> ProjectFactory<'a> {
    /// Creates a new ProjectFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Project {id}"`
    /// - category: `"web"`
    /// - status: `"approved"`
    pub fn new(db: &'a DatabaseConnection, submitter_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            submitter_id,
            name: format!("Project {}", id),
            category: "web".to_string(),
            status: "approved".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the project entity into the database.
    pub async fn build(self) -> Result<entity::project::Model, DbErr> {
        let now = Utc::now();
        entity::project::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set("A project for tests".to_string()),
            detail: ActiveValue::Set(String::new()),
            github: ActiveValue::Set(None),
            category: ActiveValue::Set(self.category),
            cover: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            submitter_id: ActiveValue::Set(self.submitter_id),
            views: ActiveValue::Set(0),
            loves: ActiveValue::Set(0),
            collections: ActiveValue::Set(0),
            reject_reason: ActiveValue::Set(None),
            audit_time: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an approved project submitted by the given user.
pub async fn create_project(
    db: &DatabaseConnection,
    submitter_id: i32,
) -> Result<entity::project::Model, DbErr> {
    ProjectFactory::new(db, submitter_id).build().await
}
