//! Likes, collections, and views.
//!
//! Each mark is a row keyed by `(user_id, resource_type, resource_id)` plus a denormalized
//! counter on the resource row. Both change inside one transaction, and the counter moves
//! only when a row was actually inserted or deleted, so repeating a call never drifts the
//! count away from the number of rows.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, QueryFilter, QueryOrder, SqlErr, TransactionTrait,
};

use crate::server::{
    data::resource::{self, Step},
    model::{
        engagement::{EngagementFlags, ToggleOutcome},
        resource::{Counter, ResourceKind},
    },
};

/// Which mark table an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Like,
    Collect,
}

impl Mark {
    fn counter(self) -> Counter {
        match self {
            Mark::Like => Counter::Loves,
            Mark::Collect => Counter::Collections,
        }
    }
}

pub struct EngagementRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EngagementRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Likes a resource. Liking twice leaves the count unchanged.
    ///
    /// # Returns
    /// - `Ok(Some(ToggleOutcome))` - Liked state and current like count
    /// - `Ok(None)` - Resource does not exist
    pub async fn like(
        &self,
        kind: ResourceKind,
        resource_id: i32,
        user_id: i32,
    ) -> Result<Option<ToggleOutcome>, DbErr> {
        self.mark(Mark::Like, kind, resource_id, user_id).await
    }

    /// Removes a like. Unliking something never liked is a no-op.
    pub async fn unlike(
        &self,
        kind: ResourceKind,
        resource_id: i32,
        user_id: i32,
    ) -> Result<Option<ToggleOutcome>, DbErr> {
        self.unmark(Mark::Like, kind, resource_id, user_id).await
    }

    /// Collects a resource. Collecting twice leaves the count unchanged.
    pub async fn collect(
        &self,
        kind: ResourceKind,
        resource_id: i32,
        user_id: i32,
    ) -> Result<Option<ToggleOutcome>, DbErr> {
        self.mark(Mark::Collect, kind, resource_id, user_id).await
    }

    /// Removes a collection. Uncollecting something never collected is a no-op.
    pub async fn uncollect(
        &self,
        kind: ResourceKind,
        resource_id: i32,
        user_id: i32,
    ) -> Result<Option<ToggleOutcome>, DbErr> {
        self.unmark(Mark::Collect, kind, resource_id, user_id).await
    }

    /// Increments the view counter.
    ///
    /// # Returns
    /// - `Ok(Some(views))` - The view count after the increment
    /// - `Ok(None)` - Resource does not exist
    pub async fn record_view(
        &self,
        kind: ResourceKind,
        resource_id: i32,
    ) -> Result<Option<i32>, DbErr> {
        let txn = self.db.begin().await?;

        if !resource::adjust_counter(&txn, kind, resource_id, Counter::Views, Step::Up).await? {
            return Ok(None);
        }
        let views = resource::counters(&txn, kind, resource_id)
            .await?
            .map(|c| c.views);

        txn.commit().await?;
        Ok(views)
    }

    /// Whether the user has liked and collected the resource.
    pub async fn flags(
        &self,
        kind: ResourceKind,
        resource_id: i32,
        user_id: i32,
    ) -> Result<EngagementFlags, DbErr> {
        let key = (user_id, kind.as_str().to_string(), resource_id);
        let isliked = entity::prelude::Like::find_by_id(key.clone())
            .one(self.db)
            .await?
            .is_some();
        let iscollected = entity::prelude::Collection::find_by_id(key)
            .one(self.db)
            .await?
            .is_some();

        Ok(EngagementFlags {
            isliked,
            iscollected,
        })
    }

    /// A user's collection rows, most recently collected first.
    pub async fn collections_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::collection::Model>, DbErr> {
        entity::prelude::Collection::find()
            .filter(entity::collection::Column::UserId.eq(user_id))
            .order_by_desc(entity::collection::Column::CreatedAt)
            .all(self.db)
            .await
    }

    async fn mark(
        &self,
        mark: Mark,
        kind: ResourceKind,
        resource_id: i32,
        user_id: i32,
    ) -> Result<Option<ToggleOutcome>, DbErr> {
        let txn = self.db.begin().await?;

        if resource::counters(&txn, kind, resource_id).await?.is_none() {
            return Ok(None);
        }

        let changed = if mark_exists(&txn, mark, kind, resource_id, user_id).await? {
            false
        } else {
            insert_mark(&txn, mark, kind, resource_id, user_id).await?
        };
        if changed {
            resource::adjust_counter(&txn, kind, resource_id, mark.counter(), Step::Up).await?;
        }

        let outcome = current_outcome(&txn, mark, kind, resource_id, true, changed).await?;
        txn.commit().await?;
        Ok(outcome)
    }

    async fn unmark(
        &self,
        mark: Mark,
        kind: ResourceKind,
        resource_id: i32,
        user_id: i32,
    ) -> Result<Option<ToggleOutcome>, DbErr> {
        let txn = self.db.begin().await?;

        if resource::counters(&txn, kind, resource_id).await?.is_none() {
            return Ok(None);
        }

        let changed = delete_mark(&txn, mark, kind, resource_id, user_id).await?;
        if changed {
            resource::adjust_counter(&txn, kind, resource_id, mark.counter(), Step::Down).await?;
        }

        let outcome = current_outcome(&txn, mark, kind, resource_id, false, changed).await?;
        txn.commit().await?;
        Ok(outcome)
    }
}

async fn current_outcome(
    txn: &DatabaseTransaction,
    mark: Mark,
    kind: ResourceKind,
    resource_id: i32,
    active: bool,
    changed: bool,
) -> Result<Option<ToggleOutcome>, DbErr> {
    Ok(resource::counters(txn, kind, resource_id)
        .await?
        .map(|counters| ToggleOutcome {
            active,
            changed,
            count: match mark {
                Mark::Like => counters.loves,
                Mark::Collect => counters.collections,
            },
        }))
}

async fn mark_exists(
    txn: &DatabaseTransaction,
    mark: Mark,
    kind: ResourceKind,
    resource_id: i32,
    user_id: i32,
) -> Result<bool, DbErr> {
    let key = (user_id, kind.as_str().to_string(), resource_id);
    let found = match mark {
        Mark::Like => entity::prelude::Like::find_by_id(key).one(txn).await?.is_some(),
        Mark::Collect => entity::prelude::Collection::find_by_id(key)
            .one(txn)
            .await?
            .is_some(),
    };
    Ok(found)
}

/// Inserts the mark row. A unique violation from a concurrent insert counts as "already
/// present" and reports no change.
async fn insert_mark(
    txn: &DatabaseTransaction,
    mark: Mark,
    kind: ResourceKind,
    resource_id: i32,
    user_id: i32,
) -> Result<bool, DbErr> {
    let now = Utc::now();
    let resource_type = kind.as_str().to_string();

    let result = match mark {
        Mark::Like => entity::like::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            resource_type: ActiveValue::Set(resource_type),
            resource_id: ActiveValue::Set(resource_id),
            created_at: ActiveValue::Set(now),
        }
        .insert(txn)
        .await
        .map(|_| ()),
        Mark::Collect => entity::collection::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            resource_type: ActiveValue::Set(resource_type),
            resource_id: ActiveValue::Set(resource_id),
            created_at: ActiveValue::Set(now),
        }
        .insert(txn)
        .await
        .map(|_| ()),
    };

    match result {
        Ok(()) => Ok(true),
        Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            Ok(false)
        }
        Err(err) => Err(err),
    }
}

async fn delete_mark(
    txn: &DatabaseTransaction,
    mark: Mark,
    kind: ResourceKind,
    resource_id: i32,
    user_id: i32,
) -> Result<bool, DbErr> {
    let resource_type = kind.as_str();

    let result = match mark {
        Mark::Like => {
            entity::prelude::Like::delete_many()
                .filter(entity::like::Column::UserId.eq(user_id))
                .filter(entity::like::Column::ResourceType.eq(resource_type))
                .filter(entity::like::Column::ResourceId.eq(resource_id))
                .exec(txn)
                .await?
        }
        Mark::Collect => {
            entity::prelude::Collection::delete_many()
                .filter(entity::collection::Column::UserId.eq(user_id))
                .filter(entity::collection::Column::ResourceType.eq(resource_type))
                .filter(entity::collection::Column::ResourceId.eq(resource_id))
                .exec(txn)
                .await?
        }
    };

    Ok(result.rows_affected > 0)
}
