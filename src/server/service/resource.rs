//! Rules shared by the tool, course, and project services.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comment::CommentRepository, engagement::EngagementRepository, resource::ResourceRepository},
    error::AppError,
    model::{
        comment::{CommentPage, DEFAULT_COMMENT_LIMIT},
        engagement::EngagementFlags,
        resource::{ResourceKind, ReviewStatus},
        user::User,
    },
};

pub struct ResourceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResourceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fails with 404 unless the resource exists.
    pub async fn require_exists(&self, kind: ResourceKind, id: i32) -> Result<(), AppError> {
        if ResourceRepository::new(self.db).exists(kind, id).await? {
            Ok(())
        } else {
            Err(not_found(kind))
        }
    }

    /// Fails with 404 unless the resource exists and `viewer` may see it.
    ///
    /// Comments, engagement, and course materials go through this so a hidden resource
    /// stays hidden on every route, not only on its detail page.
    pub async fn require_visible(
        &self,
        kind: ResourceKind,
        id: i32,
        viewer: Option<&User>,
    ) -> Result<(), AppError> {
        let status = ResourceRepository::new(self.db)
            .status(kind, id)
            .await?
            .ok_or_else(|| not_found(kind))?;

        self.ensure_visible(kind, id, &status, viewer).await
    }

    /// Checks that `viewer` may see a resource with the given status.
    ///
    /// Approved resources are public. Anything else is only shown to admins and owners;
    /// everyone else gets a 404 so unpublished submissions are not revealed.
    pub async fn ensure_visible(
        &self,
        kind: ResourceKind,
        id: i32,
        status: &str,
        viewer: Option<&User>,
    ) -> Result<(), AppError> {
        if status == ReviewStatus::Approved.as_str() {
            return Ok(());
        }

        match viewer {
            Some(user) if user.is_admin() => Ok(()),
            Some(user) if ResourceRepository::new(self.db).is_owner(kind, id, user.id).await? => {
                Ok(())
            }
            _ => Err(not_found(kind)),
        }
    }

    /// Fails with 403 unless `user_id` owns the resource.
    pub async fn ensure_owner(
        &self,
        kind: ResourceKind,
        id: i32,
        user_id: i32,
    ) -> Result<(), AppError> {
        if ResourceRepository::new(self.db).is_owner(kind, id, user_id).await? {
            Ok(())
        } else {
            Err(AppError::Forbidden(format!("only the owner may modify this {}", kind)))
        }
    }

    /// Loads the viewer's flags and the first comment page shown on a detail page.
    pub async fn detail_extras(
        &self,
        kind: ResourceKind,
        id: i32,
        viewer: Option<&User>,
    ) -> Result<(EngagementFlags, CommentPage), AppError> {
        let flags = match viewer {
            Some(user) => EngagementRepository::new(self.db).flags(kind, id, user.id).await?,
            None => EngagementFlags::default(),
        };
        let comments = CommentRepository::new(self.db)
            .list(kind, id, None, DEFAULT_COMMENT_LIMIT)
            .await?;

        Ok((flags, comments))
    }
}

/// The 404 returned for a missing or hidden resource.
pub fn not_found(kind: ResourceKind) -> AppError {
    AppError::NotFound(format!("{} not found", kind))
}

/// Parses a resource kind from a path or query segment, 400 when unknown.
pub fn parse_kind(value: &str) -> Result<ResourceKind, AppError> {
    ResourceKind::from_name(value)
        .ok_or_else(|| AppError::BadRequest(format!("unknown resource type '{}'", value)))
}
