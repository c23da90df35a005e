//! Operations shared by every resource kind.
//!
//! Tools, courses, and projects live in separate tables with the same counter, status,
//! and ownership columns. This repository dispatches on `ResourceKind` so the shared
//! operations exist exactly once.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::resource::{
    Counter, Counters, ResourceKind, ResourceSummary, ReviewStatus, StatusChange,
};

/// Direction of a counter change. Decrements never go below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Up,
    Down,
}

/// New status plus the review fields that go with it.
#[derive(Debug, Clone)]
pub struct StatusUpdate {
    pub status: ReviewStatus,
    pub reject_reason: Option<String>,
    /// Set on admin review, cleared on owner resubmission.
    pub audited: bool,
    pub operator_id: i32,
    /// Reason recorded in the status log.
    pub log_reason: Option<String>,
}

pub struct ResourceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResourceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether a resource of the given kind exists, regardless of status.
    pub async fn exists(&self, kind: ResourceKind, id: i32) -> Result<bool, DbErr> {
        Ok(counters(self.db, kind, id).await?.is_some())
    }

    /// Review status of a resource, or `None` when it does not exist.
    pub async fn status(&self, kind: ResourceKind, id: i32) -> Result<Option<String>, DbErr> {
        let status = match kind {
            ResourceKind::Tool => entity::prelude::Tool::find_by_id(id)
                .one(self.db)
                .await?
                .map(|m| m.status),
            ResourceKind::Course => entity::prelude::Course::find_by_id(id)
                .one(self.db)
                .await?
                .map(|m| m.status),
            ResourceKind::Project => entity::prelude::Project::find_by_id(id)
                .one(self.db)
                .await?
                .map(|m| m.status),
        };

        Ok(status)
    }

    /// Current counter values, or `None` when the resource does not exist.
    pub async fn counters(&self, kind: ResourceKind, id: i32) -> Result<Option<Counters>, DbErr> {
        counters(self.db, kind, id).await
    }

    /// Changes one counter by one step.
    ///
    /// # Returns
    /// - `Ok(true)` - The row changed
    /// - `Ok(false)` - Resource missing, or a decrement at zero
    pub async fn adjust_counter(
        &self,
        kind: ResourceKind,
        id: i32,
        counter: Counter,
        step: Step,
    ) -> Result<bool, DbErr> {
        adjust_counter(self.db, kind, id, counter, step).await
    }

    /// Loads the summary of a single resource.
    pub async fn find_summary(
        &self,
        kind: ResourceKind,
        id: i32,
    ) -> Result<Option<ResourceSummary>, DbErr> {
        Ok(self.find_summaries(kind, &[id]).await?.remove(&id))
    }

    /// Loads summaries for the given ids, keyed by id. Missing ids are absent from the map.
    pub async fn find_summaries(
        &self,
        kind: ResourceKind,
        ids: &[i32],
    ) -> Result<HashMap<i32, ResourceSummary>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let summaries = match kind {
            ResourceKind::Tool => {
                let tools = entity::prelude::Tool::find()
                    .filter(entity::tool::Column::Id.is_in(ids.to_vec()))
                    .all(self.db)
                    .await?;
                self.tool_summaries(tools).await?
            }
            ResourceKind::Course => entity::prelude::Course::find()
                .filter(entity::course::Column::Id.is_in(ids.to_vec()))
                .all(self.db)
                .await?
                .into_iter()
                .map(ResourceSummary::from_course)
                .collect(),
            ResourceKind::Project => entity::prelude::Project::find()
                .filter(entity::project::Column::Id.is_in(ids.to_vec()))
                .all(self.db)
                .await?
                .into_iter()
                .map(ResourceSummary::from_project)
                .collect::<Vec<_>>(),
        };

        Ok(summaries.into_iter().map(|s| (s.id, s)).collect())
    }

    /// Resources submitted by a user, newest first, optionally limited to one status.
    pub async fn submissions_by_user(
        &self,
        kind: ResourceKind,
        user_id: i32,
        status: Option<ReviewStatus>,
    ) -> Result<Vec<ResourceSummary>, DbErr> {
        match kind {
            ResourceKind::Tool => {
                let mut query = entity::prelude::Tool::find()
                    .filter(entity::tool::Column::SubmitterId.eq(user_id));
                if let Some(status) = status {
                    query = query.filter(entity::tool::Column::Status.eq(status.as_str()));
                }
                let tools = query
                    .order_by_desc(entity::tool::Column::CreatedAt)
                    .order_by_desc(entity::tool::Column::Id)
                    .all(self.db)
                    .await?;
                self.tool_summaries(tools).await
            }
            ResourceKind::Course => {
                let mut query = entity::prelude::Course::find()
                    .filter(entity::course::Column::SubmitterId.eq(user_id));
                if let Some(status) = status {
                    query = query.filter(entity::course::Column::Status.eq(status.as_str()));
                }
                Ok(query
                    .order_by_desc(entity::course::Column::CreatedAt)
                    .order_by_desc(entity::course::Column::Id)
                    .all(self.db)
                    .await?
                    .into_iter()
                    .map(ResourceSummary::from_course)
                    .collect())
            }
            ResourceKind::Project => {
                let mut query = entity::prelude::Project::find()
                    .filter(entity::project::Column::SubmitterId.eq(user_id));
                if let Some(status) = status {
                    query = query.filter(entity::project::Column::Status.eq(status.as_str()));
                }
                Ok(query
                    .order_by_desc(entity::project::Column::CreatedAt)
                    .order_by_desc(entity::project::Column::Id)
                    .all(self.db)
                    .await?
                    .into_iter()
                    .map(ResourceSummary::from_project)
                    .collect())
            }
        }
    }

    /// Number of pending submissions of one kind.
    pub async fn pending_count(&self, kind: ResourceKind) -> Result<u64, DbErr> {
        let pending = ReviewStatus::Pending.as_str();

        match kind {
            ResourceKind::Tool => {
                entity::prelude::Tool::find()
                    .filter(entity::tool::Column::Status.eq(pending))
                    .count(self.db)
                    .await
            }
            ResourceKind::Course => {
                entity::prelude::Course::find()
                    .filter(entity::course::Column::Status.eq(pending))
                    .count(self.db)
                    .await
            }
            ResourceKind::Project => {
                entity::prelude::Project::find()
                    .filter(entity::project::Column::Status.eq(pending))
                    .count(self.db)
                    .await
            }
        }
    }

    /// Pending submissions of one kind, oldest first, paginated.
    ///
    /// # Returns
    /// - `Ok((items, total))` - The requested page and the total number of pending rows
    pub async fn pending_page(
        &self,
        kind: ResourceKind,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<ResourceSummary>, u64), DbErr> {
        let pending = ReviewStatus::Pending.as_str();

        match kind {
            ResourceKind::Tool => {
                let paginator = entity::prelude::Tool::find()
                    .filter(entity::tool::Column::Status.eq(pending))
                    .order_by_asc(entity::tool::Column::CreatedAt)
                    .order_by_asc(entity::tool::Column::Id)
                    .paginate(self.db, per_page);
                let total = paginator.num_items().await?;
                let tools = paginator.fetch_page(page).await?;
                Ok((self.tool_summaries(tools).await?, total))
            }
            ResourceKind::Course => {
                let paginator = entity::prelude::Course::find()
                    .filter(entity::course::Column::Status.eq(pending))
                    .order_by_asc(entity::course::Column::CreatedAt)
                    .order_by_asc(entity::course::Column::Id)
                    .paginate(self.db, per_page);
                let total = paginator.num_items().await?;
                let courses = paginator.fetch_page(page).await?;
                Ok((
                    courses.into_iter().map(ResourceSummary::from_course).collect(),
                    total,
                ))
            }
            ResourceKind::Project => {
                let paginator = entity::prelude::Project::find()
                    .filter(entity::project::Column::Status.eq(pending))
                    .order_by_asc(entity::project::Column::CreatedAt)
                    .order_by_asc(entity::project::Column::Id)
                    .paginate(self.db, per_page);
                let total = paginator.num_items().await?;
                let projects = paginator.fetch_page(page).await?;
                Ok((
                    projects.into_iter().map(ResourceSummary::from_project).collect(),
                    total,
                ))
            }
        }
    }

    /// Whether `user_id` owns the resource.
    ///
    /// Tools and courses are owned by their submitter. Projects are owned by the submitter
    /// and by every listed author.
    pub async fn is_owner(&self, kind: ResourceKind, id: i32, user_id: i32) -> Result<bool, DbErr> {
        let Some(summary) = self.find_summary(kind, id).await? else {
            return Ok(false);
        };
        if summary.submitter_id == user_id {
            return Ok(true);
        }

        if kind == ResourceKind::Project {
            let authors = entity::prelude::ProjectAuthor::find()
                .filter(entity::project_author::Column::ProjectId.eq(id))
                .filter(entity::project_author::Column::UserId.eq(user_id))
                .count(self.db)
                .await?;
            return Ok(authors > 0);
        }

        Ok(false)
    }

    /// Changes a resource's review status and writes a status log row, in one transaction.
    ///
    /// # Returns
    /// - `Ok(Some(StatusChange))` - Old and new status with the change time
    /// - `Ok(None)` - Resource does not exist
    pub async fn update_status(
        &self,
        kind: ResourceKind,
        id: i32,
        update: StatusUpdate,
    ) -> Result<Option<StatusChange>, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();
        let new_status = update.status.as_str().to_string();
        let audit_time = if update.audited { Some(now) } else { None };

        let old_status = match kind {
            ResourceKind::Tool => {
                let Some(tool) = entity::prelude::Tool::find_by_id(id).one(&txn).await? else {
                    return Ok(None);
                };
                let old = tool.status.clone();
                let mut active = tool.into_active_model();
                active.status = ActiveValue::Set(new_status.clone());
                active.reject_reason = ActiveValue::Set(update.reject_reason.clone());
                active.audit_time = ActiveValue::Set(audit_time);
                active.updated_at = ActiveValue::Set(now);
                active.update(&txn).await?;
                old
            }
            ResourceKind::Course => {
                let Some(course) = entity::prelude::Course::find_by_id(id).one(&txn).await?
                else {
                    return Ok(None);
                };
                let old = course.status.clone();
                let mut active = course.into_active_model();
                active.status = ActiveValue::Set(new_status.clone());
                active.reject_reason = ActiveValue::Set(update.reject_reason.clone());
                active.audit_time = ActiveValue::Set(audit_time);
                active.updated_at = ActiveValue::Set(now);
                active.update(&txn).await?;
                old
            }
            ResourceKind::Project => {
                let Some(project) = entity::prelude::Project::find_by_id(id).one(&txn).await?
                else {
                    return Ok(None);
                };
                let old = project.status.clone();
                let mut active = project.into_active_model();
                active.status = ActiveValue::Set(new_status.clone());
                active.reject_reason = ActiveValue::Set(update.reject_reason.clone());
                active.audit_time = ActiveValue::Set(audit_time);
                active.updated_at = ActiveValue::Set(now);
                active.update(&txn).await?;
                old
            }
        };

        entity::resource_status_log::ActiveModel {
            id: ActiveValue::NotSet,
            resource_type: ActiveValue::Set(kind.as_str().to_string()),
            resource_id: ActiveValue::Set(id),
            operator_id: ActiveValue::Set(update.operator_id),
            old_status: ActiveValue::Set(old_status.clone()),
            new_status: ActiveValue::Set(new_status.clone()),
            reason: ActiveValue::Set(update.log_reason),
            created_at: ActiveValue::Set(now),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(Some(StatusChange {
            kind,
            resource_id: id,
            old_status,
            new_status,
            reject_reason: update.reject_reason,
            changed_at: now,
        }))
    }

    /// Builds tool summaries, using the first image of each tool as its cover.
    async fn tool_summaries(
        &self,
        tools: Vec<entity::tool::Model>,
    ) -> Result<Vec<ResourceSummary>, DbErr> {
        let ids: Vec<i32> = tools.iter().map(|t| t.id).collect();
        let mut covers: HashMap<i32, String> = HashMap::new();

        if !ids.is_empty() {
            let images = entity::prelude::ToolImage::find()
                .filter(entity::tool_image::Column::ToolId.is_in(ids))
                .order_by_asc(entity::tool_image::Column::SortOrder)
                .order_by_asc(entity::tool_image::Column::Id)
                .all(self.db)
                .await?;
            for image in images {
                covers.entry(image.tool_id).or_insert(image.image_url);
            }
        }

        Ok(tools
            .into_iter()
            .map(|tool| {
                let cover = covers.remove(&tool.id);
                ResourceSummary::from_tool(tool, cover)
            })
            .collect())
    }
}

/// Reads the counters of a resource on any connection, including an open transaction.
pub async fn counters<C: ConnectionTrait>(
    conn: &C,
    kind: ResourceKind,
    id: i32,
) -> Result<Option<Counters>, DbErr> {
    let counters = match kind {
        ResourceKind::Tool => entity::prelude::Tool::find_by_id(id)
            .one(conn)
            .await?
            .map(|m| Counters {
                views: m.views,
                loves: m.loves,
                collections: m.collections,
            }),
        ResourceKind::Course => entity::prelude::Course::find_by_id(id)
            .one(conn)
            .await?
            .map(|m| Counters {
                views: m.views,
                loves: m.loves,
                collections: m.collections,
            }),
        ResourceKind::Project => entity::prelude::Project::find_by_id(id)
            .one(conn)
            .await?
            .map(|m| Counters {
                views: m.views,
                loves: m.loves,
                collections: m.collections,
            }),
    };

    Ok(counters)
}

/// Moves one counter column by a single step with an in-place SQL update.
///
/// Decrements only apply while the column is above zero, so the counter is floored at 0.
pub async fn adjust_counter<C: ConnectionTrait>(
    conn: &C,
    kind: ResourceKind,
    id: i32,
    counter: Counter,
    step: Step,
) -> Result<bool, DbErr> {
    match kind {
        ResourceKind::Tool => {
            let column = match counter {
                Counter::Views => entity::tool::Column::Views,
                Counter::Loves => entity::tool::Column::Loves,
                Counter::Collections => entity::tool::Column::Collections,
            };
            step_column::<entity::tool::Entity, _>(conn, entity::tool::Column::Id, column, id, step)
                .await
        }
        ResourceKind::Course => {
            let column = match counter {
                Counter::Views => entity::course::Column::Views,
                Counter::Loves => entity::course::Column::Loves,
                Counter::Collections => entity::course::Column::Collections,
            };
            step_column::<entity::course::Entity, _>(
                conn,
                entity::course::Column::Id,
                column,
                id,
                step,
            )
            .await
        }
        ResourceKind::Project => {
            let column = match counter {
                Counter::Views => entity::project::Column::Views,
                Counter::Loves => entity::project::Column::Loves,
                Counter::Collections => entity::project::Column::Collections,
            };
            step_column::<entity::project::Entity, _>(
                conn,
                entity::project::Column::Id,
                column,
                id,
                step,
            )
            .await
        }
    }
}

/// `UPDATE <table> SET col = col ± 1 WHERE id = ? [AND col > 0]`
pub async fn step_column<E, C>(
    conn: &C,
    id_column: E::Column,
    column: E::Column,
    id: i32,
    step: Step,
) -> Result<bool, DbErr>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    let update = E::update_many().filter(id_column.eq(id));
    let update = match step {
        Step::Up => update.col_expr(column, Expr::col(column).add(1)),
        Step::Down => update
            .col_expr(column, Expr::col(column).sub(1))
            .filter(column.gt(0)),
    };

    Ok(update.exec(conn).await?.rows_affected > 0)
}
