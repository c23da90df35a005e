//! Comment threads on tools, courses, and projects.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::comment::{CommentRepository, ReplyDeletion},
    error::AppError,
    model::{
        comment::{comment_limit, CommentEntry, CommentPage},
        engagement::ToggleOutcome,
        resource::ResourceKind,
        user::User,
    },
    service::resource::ResourceService,
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// One page of top-level comments with their live replies.
    pub async fn list(
        &self,
        kind: ResourceKind,
        resource_id: i32,
        cursor: Option<i32>,
        limit: Option<u64>,
        viewer: Option<&User>,
    ) -> Result<CommentPage, AppError> {
        ResourceService::new(self.db)
            .require_visible(kind, resource_id, viewer)
            .await?;

        let page = CommentRepository::new(self.db)
            .list(kind, resource_id, cursor, comment_limit(limit))
            .await?;

        Ok(page)
    }

    pub async fn create(
        &self,
        kind: ResourceKind,
        resource_id: i32,
        user: &User,
        content: &str,
    ) -> Result<CommentEntry, AppError> {
        let content = non_empty(content)?;
        ResourceService::new(self.db)
            .require_visible(kind, resource_id, Some(user))
            .await?;

        let comment = CommentRepository::new(self.db)
            .create(kind, resource_id, user.id, content)
            .await?;

        Ok(comment)
    }

    /// Soft-deletes one of the caller's top-level comments, or their latest one when
    /// `comment_id` is `None`.
    pub async fn delete(
        &self,
        kind: ResourceKind,
        resource_id: i32,
        user_id: i32,
        comment_id: Option<i32>,
    ) -> Result<(), AppError> {
        let deleted = CommentRepository::new(self.db)
            .delete_top_level(kind, resource_id, user_id, comment_id)
            .await?;

        if deleted {
            Ok(())
        } else {
            Err(comment_not_found())
        }
    }

    pub async fn reply(
        &self,
        kind: ResourceKind,
        resource_id: i32,
        parent_id: i32,
        user: &User,
        content: &str,
    ) -> Result<CommentEntry, AppError> {
        let content = non_empty(content)?;
        ResourceService::new(self.db)
            .require_visible(kind, resource_id, Some(user))
            .await?;

        CommentRepository::new(self.db)
            .reply(kind, resource_id, parent_id, user.id, content)
            .await?
            .ok_or_else(comment_not_found)
    }

    pub async fn delete_reply(
        &self,
        kind: ResourceKind,
        resource_id: i32,
        comment_id: i32,
        user_id: i32,
    ) -> Result<(), AppError> {
        let outcome = CommentRepository::new(self.db)
            .delete_reply(kind, resource_id, comment_id, user_id)
            .await?;

        match outcome {
            ReplyDeletion::Deleted => Ok(()),
            ReplyDeletion::NotFound => Err(comment_not_found()),
            ReplyDeletion::NotAReply => Err(AppError::BadRequest("not a reply".to_string())),
        }
    }

    pub async fn toggle_like(
        &self,
        kind: ResourceKind,
        resource_id: i32,
        comment_id: i32,
        user: &User,
    ) -> Result<ToggleOutcome, AppError> {
        ResourceService::new(self.db)
            .require_visible(kind, resource_id, Some(user))
            .await?;

        CommentRepository::new(self.db)
            .toggle_like(kind, resource_id, comment_id, user.id)
            .await?
            .ok_or_else(comment_not_found)
    }
}

fn comment_not_found() -> AppError {
    AppError::NotFound("comment not found".to_string())
}

fn non_empty(content: &str) -> Result<String, AppError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(AppError::BadRequest("comment content must not be empty".to_string()));
    }
    Ok(content.to_string())
}
