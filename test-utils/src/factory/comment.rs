//! Comment factory for creating test comments and replies.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments.
///
/// The factory writes the row as-is and does not touch the parent's `reply_total`; set it
/// with `reply_total()` on the parent when a test depends on it.
///
/// # Example
///
/// ```rust,ignore
/// let reply = CommentFactory::new(&db, "tool", tool.id, user.id)
///     .parent(Some(top.id))
///     .content("agreed")
///     .build()
///     .await?;
/// ```
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    resource_type: String,
    resource_id: i32,
    user_id: i32,
    parent_id: Option<i32>,
    content: String,
    reply_total: i32,
    deleted_at: Option<DateTime<Utc>>,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new top-level comment factory with content `"Comment {id}"`.
    pub fn new(
        db: &'a DatabaseConnection,
        resource_type: impl Into<String>,
        resource_id: i32,
        user_id: i32,
    ) -> Self {
        let id = next_id();
        Self {
            db,
            resource_type: resource_type.into(),
            resource_id,
            user_id,
            parent_id: None,
            content: format!("Comment {}", id),
            reply_total: 0,
            deleted_at: None,
        }
    }

    pub fn parent(mut self, parent_id: Option<i32>) -> Self {
        self.parent_id = parent_id;
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn reply_total(mut self, reply_total: i32) -> Self {
        self.reply_total = reply_total;
        self
    }

    /// Marks the comment as soft-deleted.
    pub fn deleted(mut self) -> Self {
        self.deleted_at = Some(Utc::now());
        self
    }

    /// Builds and inserts the comment into the database.
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        let now = Utc::now();
        entity::comment::ActiveModel {
            id: ActiveValue::NotSet,
            resource_type: ActiveValue::Set(self.resource_type),
            resource_id: ActiveValue::Set(self.resource_id),
            parent_id: ActiveValue::Set(self.parent_id),
            user_id: ActiveValue::Set(self.user_id),
            content: ActiveValue::Set(self.content),
            love_count: ActiveValue::Set(0),
            reply_total: ActiveValue::Set(self.reply_total),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(self.deleted_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a live top-level comment.
pub async fn create_comment(
    db: &DatabaseConnection,
    resource_type: &str,
    resource_id: i32,
    user_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, resource_type, resource_id, user_id)
        .build()
        .await
}

/// Creates a live reply under `parent`, on the same resource.
pub async fn create_reply(
    db: &DatabaseConnection,
    parent: &entity::comment::Model,
    user_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, parent.resource_type.clone(), parent.resource_id, user_id)
        .parent(Some(parent.id))
        .build()
        .await
}
