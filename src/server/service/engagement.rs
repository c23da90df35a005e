//! Likes, collections, and view counts for any resource kind.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::engagement::EngagementRepository,
    error::AppError,
    model::{engagement::ToggleOutcome, resource::ResourceKind, user::User},
    service::resource::{not_found, ResourceService},
};

pub struct EngagementService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EngagementService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn like(
        &self,
        kind: ResourceKind,
        id: i32,
        user: &User,
    ) -> Result<ToggleOutcome, AppError> {
        self.require_visible(kind, id, Some(user)).await?;
        let outcome = EngagementRepository::new(self.db)
            .like(kind, id, user.id)
            .await?;
        outcome.ok_or_else(|| not_found(kind))
    }

    pub async fn unlike(
        &self,
        kind: ResourceKind,
        id: i32,
        user: &User,
    ) -> Result<ToggleOutcome, AppError> {
        self.require_visible(kind, id, Some(user)).await?;
        let outcome = EngagementRepository::new(self.db)
            .unlike(kind, id, user.id)
            .await?;
        outcome.ok_or_else(|| not_found(kind))
    }

    pub async fn collect(
        &self,
        kind: ResourceKind,
        id: i32,
        user: &User,
    ) -> Result<ToggleOutcome, AppError> {
        self.require_visible(kind, id, Some(user)).await?;
        let outcome = EngagementRepository::new(self.db)
            .collect(kind, id, user.id)
            .await?;
        outcome.ok_or_else(|| not_found(kind))
    }

    pub async fn uncollect(
        &self,
        kind: ResourceKind,
        id: i32,
        user: &User,
    ) -> Result<ToggleOutcome, AppError> {
        self.require_visible(kind, id, Some(user)).await?;
        let outcome = EngagementRepository::new(self.db)
            .uncollect(kind, id, user.id)
            .await?;
        outcome.ok_or_else(|| not_found(kind))
    }

    /// Counts one view and returns the new total.
    ///
    /// Views of a resource hidden from `viewer` are not counted and report 404.
    pub async fn view(
        &self,
        kind: ResourceKind,
        id: i32,
        viewer: Option<&User>,
    ) -> Result<i32, AppError> {
        self.require_visible(kind, id, viewer).await?;
        let views = EngagementRepository::new(self.db)
            .record_view(kind, id)
            .await?;
        views.ok_or_else(|| not_found(kind))
    }

    async fn require_visible(
        &self,
        kind: ResourceKind,
        id: i32,
        viewer: Option<&User>,
    ) -> Result<(), AppError> {
        ResourceService::new(self.db)
            .require_visible(kind, id, viewer)
            .await
    }
}
