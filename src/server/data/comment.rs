//! Comment data repository.
//!
//! Comments are threaded one level deep: a top-level comment has `parent_id = NULL`, and a
//! reply points at a top-level comment. Deletion is soft (`deleted_at`), and soft-deleted
//! rows never appear in listings or counts. Reply creation and reply deletion adjust the
//! parent's `reply_total` in the same transaction.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, SqlErr,
    TransactionTrait,
};

use crate::server::{
    data::{
        resource::{step_column, Step},
        user::load_users,
    },
    model::{
        comment::{CommentEntry, CommentPage, CommentThread},
        engagement::ToggleOutcome,
        resource::ResourceKind,
    },
};

/// Result of deleting a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyDeletion {
    Deleted,
    /// No live comment with that id belongs to the caller on this resource.
    NotFound,
    /// The comment exists but is top-level.
    NotAReply,
}

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of top-level comments with their live replies.
    ///
    /// Top-level comments come oldest first. The cursor is the id of the last comment on
    /// the previous page; only ids above it are returned.
    ///
    /// # Arguments
    /// - `kind` - Kind of the commented resource
    /// - `resource_id` - Id of the commented resource
    /// - `cursor` - Id of the last comment already seen
    /// - `limit` - Maximum number of top-level comments
    ///
    /// # Returns
    /// - `Ok(CommentPage)` - Threads, total number of live top-level comments, next cursor
    /// - `Err(DbErr)` - Database error during query
    pub async fn list(
        &self,
        kind: ResourceKind,
        resource_id: i32,
        cursor: Option<i32>,
        limit: u64,
    ) -> Result<CommentPage, DbErr> {
        let total = self.count(kind, resource_id).await?;

        let mut query = live_top_level(kind, resource_id);
        if let Some(cursor) = cursor {
            query = query.filter(entity::comment::Column::Id.gt(cursor));
        }
        let top = query
            .order_by_asc(entity::comment::Column::CreatedAt)
            .order_by_asc(entity::comment::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        let parent_ids: Vec<i32> = top.iter().map(|c| c.id).collect();
        let replies = if parent_ids.is_empty() {
            Vec::new()
        } else {
            entity::prelude::Comment::find()
                .filter(entity::comment::Column::ParentId.is_in(parent_ids))
                .filter(entity::comment::Column::DeletedAt.is_null())
                .order_by_asc(entity::comment::Column::CreatedAt)
                .order_by_asc(entity::comment::Column::Id)
                .all(self.db)
                .await?
        };

        let author_ids: Vec<i32> = top
            .iter()
            .chain(replies.iter())
            .map(|c| c.user_id)
            .collect();
        let authors = load_users(self.db, &author_ids).await?;

        let mut replies_by_parent: HashMap<i32, Vec<CommentEntry>> = HashMap::new();
        for reply in replies {
            let Some(parent_id) = reply.parent_id else {
                continue;
            };
            let author = authors.get(&reply.user_id);
            replies_by_parent
                .entry(parent_id)
                .or_default()
                .push(CommentEntry::from_entity(reply, author));
        }

        let next_cursor = if top.len() as u64 == limit {
            top.last().map(|c| c.id)
        } else {
            None
        };

        let threads = top
            .into_iter()
            .map(|comment| {
                let replies = replies_by_parent.remove(&comment.id).unwrap_or_default();
                let author = authors.get(&comment.user_id);
                CommentThread {
                    comment: CommentEntry::from_entity(comment, author),
                    replies,
                }
            })
            .collect();

        Ok(CommentPage {
            threads,
            total,
            next_cursor,
        })
    }

    /// Counts live top-level comments on a resource.
    pub async fn count(&self, kind: ResourceKind, resource_id: i32) -> Result<u64, DbErr> {
        live_top_level(kind, resource_id).count(self.db).await
    }

    /// Adds a top-level comment.
    pub async fn create(
        &self,
        kind: ResourceKind,
        resource_id: i32,
        user_id: i32,
        content: String,
    ) -> Result<CommentEntry, DbErr> {
        let comment = new_comment(kind, resource_id, None, user_id, content)
            .insert(self.db)
            .await?;
        let authors = load_users(self.db, &[user_id]).await?;

        Ok(CommentEntry::from_entity(comment, authors.get(&user_id)))
    }

    /// Soft-deletes one of the caller's top-level comments on a resource.
    ///
    /// With `comment_id` the given comment is deleted; without it, the caller's most recent
    /// live comment on the resource is.
    ///
    /// # Returns
    /// - `Ok(true)` - A comment was deleted
    /// - `Ok(false)` - No matching live comment
    pub async fn delete_top_level(
        &self,
        kind: ResourceKind,
        resource_id: i32,
        user_id: i32,
        comment_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = live_top_level(kind, resource_id)
            .filter(entity::comment::Column::UserId.eq(user_id));
        if let Some(id) = comment_id {
            query = query.filter(entity::comment::Column::Id.eq(id));
        }

        let Some(comment) = query
            .order_by_desc(entity::comment::Column::CreatedAt)
            .order_by_desc(entity::comment::Column::Id)
            .one(self.db)
            .await?
        else {
            return Ok(false);
        };

        let now = Utc::now();
        let mut active = comment.into_active_model();
        active.deleted_at = ActiveValue::Set(Some(now));
        active.updated_at = ActiveValue::Set(now);
        active.update(self.db).await?;

        Ok(true)
    }

    /// Adds a reply to a live top-level comment and bumps its `reply_total`.
    ///
    /// # Returns
    /// - `Ok(Some(CommentEntry))` - The created reply
    /// - `Ok(None)` - Parent missing, deleted, a reply itself, or on another resource
    pub async fn reply(
        &self,
        kind: ResourceKind,
        resource_id: i32,
        parent_id: i32,
        user_id: i32,
        content: String,
    ) -> Result<Option<CommentEntry>, DbErr> {
        let txn = self.db.begin().await?;

        let parent = live_top_level(kind, resource_id)
            .filter(entity::comment::Column::Id.eq(parent_id))
            .one(&txn)
            .await?;
        if parent.is_none() {
            return Ok(None);
        }

        let reply = new_comment(kind, resource_id, Some(parent_id), user_id, content)
            .insert(&txn)
            .await?;
        step_column::<entity::comment::Entity, _>(
            &txn,
            entity::comment::Column::Id,
            entity::comment::Column::ReplyTotal,
            parent_id,
            Step::Up,
        )
        .await?;
        let authors = load_users(&txn, &[user_id]).await?;

        txn.commit().await?;
        Ok(Some(CommentEntry::from_entity(reply, authors.get(&user_id))))
    }

    /// Soft-deletes one of the caller's replies and decrements the parent's `reply_total`,
    /// never below zero.
    pub async fn delete_reply(
        &self,
        kind: ResourceKind,
        resource_id: i32,
        comment_id: i32,
        user_id: i32,
    ) -> Result<ReplyDeletion, DbErr> {
        let txn = self.db.begin().await?;

        let Some(comment) = entity::prelude::Comment::find_by_id(comment_id)
            .filter(entity::comment::Column::ResourceType.eq(kind.as_str()))
            .filter(entity::comment::Column::ResourceId.eq(resource_id))
            .filter(entity::comment::Column::UserId.eq(user_id))
            .filter(entity::comment::Column::DeletedAt.is_null())
            .one(&txn)
            .await?
        else {
            return Ok(ReplyDeletion::NotFound);
        };
        let Some(parent_id) = comment.parent_id else {
            return Ok(ReplyDeletion::NotAReply);
        };

        let now = Utc::now();
        let mut active = comment.into_active_model();
        active.deleted_at = ActiveValue::Set(Some(now));
        active.updated_at = ActiveValue::Set(now);
        active.update(&txn).await?;

        step_column::<entity::comment::Entity, _>(
            &txn,
            entity::comment::Column::Id,
            entity::comment::Column::ReplyTotal,
            parent_id,
            Step::Down,
        )
        .await?;

        txn.commit().await?;
        Ok(ReplyDeletion::Deleted)
    }

    /// Toggles the caller's like on a live comment of the given resource.
    ///
    /// # Returns
    /// - `Ok(Some(ToggleOutcome))` - New liked state and the comment's `love_count`
    /// - `Ok(None)` - Comment missing, deleted, or on another resource
    pub async fn toggle_like(
        &self,
        kind: ResourceKind,
        resource_id: i32,
        comment_id: i32,
        user_id: i32,
    ) -> Result<Option<ToggleOutcome>, DbErr> {
        let txn = self.db.begin().await?;

        let live = entity::prelude::Comment::find_by_id(comment_id)
            .filter(entity::comment::Column::ResourceType.eq(kind.as_str()))
            .filter(entity::comment::Column::ResourceId.eq(resource_id))
            .filter(entity::comment::Column::DeletedAt.is_null())
            .one(&txn)
            .await?;
        if live.is_none() {
            return Ok(None);
        }

        let existing = entity::prelude::CommentLike::find_by_id((user_id, comment_id))
            .one(&txn)
            .await?;

        let (active, changed) = if existing.is_some() {
            entity::prelude::CommentLike::delete_by_id((user_id, comment_id))
                .exec(&txn)
                .await?;
            step_column::<entity::comment::Entity, _>(
                &txn,
                entity::comment::Column::Id,
                entity::comment::Column::LoveCount,
                comment_id,
                Step::Down,
            )
            .await?;
            (false, true)
        } else {
            let inserted = entity::comment_like::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                comment_id: ActiveValue::Set(comment_id),
                created_at: ActiveValue::Set(Utc::now()),
            }
            .insert(&txn)
            .await;

            match inserted {
                Ok(_) => {
                    step_column::<entity::comment::Entity, _>(
                        &txn,
                        entity::comment::Column::Id,
                        entity::comment::Column::LoveCount,
                        comment_id,
                        Step::Up,
                    )
                    .await?;
                    (true, true)
                }
                Err(err)
                    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) =>
                {
                    (true, false)
                }
                Err(err) => return Err(err),
            }
        };

        let count = entity::prelude::Comment::find_by_id(comment_id)
            .one(&txn)
            .await?
            .map(|c| c.love_count)
            .unwrap_or_default();

        txn.commit().await?;
        Ok(Some(ToggleOutcome {
            active,
            changed,
            count,
        }))
    }
}

fn live_top_level(kind: ResourceKind, resource_id: i32) -> Select<entity::comment::Entity> {
    entity::prelude::Comment::find()
        .filter(entity::comment::Column::ResourceType.eq(kind.as_str()))
        .filter(entity::comment::Column::ResourceId.eq(resource_id))
        .filter(entity::comment::Column::ParentId.is_null())
        .filter(entity::comment::Column::DeletedAt.is_null())
}

fn new_comment(
    kind: ResourceKind,
    resource_id: i32,
    parent_id: Option<i32>,
    user_id: i32,
    content: String,
) -> entity::comment::ActiveModel {
    let now = Utc::now();
    entity::comment::ActiveModel {
        id: ActiveValue::NotSet,
        resource_type: ActiveValue::Set(kind.as_str().to_string()),
        resource_id: ActiveValue::Set(resource_id),
        parent_id: ActiveValue::Set(parent_id),
        user_id: ActiveValue::Set(user_id),
        content: ActiveValue::Set(content),
        love_count: ActiveValue::Set(0),
        reply_total: ActiveValue::Set(0),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        deleted_at: ActiveValue::Set(None),
    }
}
