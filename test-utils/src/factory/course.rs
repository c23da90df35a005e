//! Course factory for creating test course entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test courses with customizable fields.
pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    submitter_id: i32,
    name: String,
    semester: String,
    credit: f64,
    status: String,
}

impl<'a> CourseFactory<'a> {
    /// Creates a new CourseFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Course {id}"`
    /// - semester: `"2025-fall"`
    /// - credit: `3.0`
    /// - status: `"approved"`
    pub fn new(db: &'a DatabaseConnection, submitter_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            submitter_id,
            name: format!("Course {}", id),
            semester: "2025-fall".to_string(),
            credit: 3.0,
            status: "approved".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn semester(mut self, semester: impl Into<String>) -> Self {
        self.semester = semester.into();
        self
    }

    pub fn credit(mut self, credit: f64) -> Self {
        self.credit = credit;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the course entity into the database.
    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        let now = Utc::now();
        entity::course::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            semester: ActiveValue::Set(self.semester),
            credit: ActiveValue::Set(self.credit),
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

/// Creates an approved course submitted by the given user.
pub async fn create_course(
    db: &DatabaseConnection,
    submitter_id: i32,
) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db, submitter_id).build().await
}
