//! Tool data repository.
//!
//! Tools carry three join tables (tags, images, contributors). Submissions and edits
//! replace the join rows in the same transaction as the tool row, and every edit puts the
//! tool back into review.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, QuerySelect, Select,
    TransactionTrait,
};

use crate::server::{
    data::user::load_users,
    model::{
        resource::{CursorPage, ListSort, ReviewStatus},
        tool::{ToolFields, ToolListFilter, ToolWithRelations},
    },
};

pub struct ToolRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ToolRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a pending tool with its tags and images. The submitter is recorded as the
    /// first contributor.
    ///
    /// # Returns
    /// - `Ok(ToolWithRelations)` - The stored tool with its join rows
    /// - `Err(DbErr)` - Database error; nothing is stored
    pub async fn create(
        &self,
        fields: ToolFields,
        submitter_id: i32,
    ) -> Result<ToolWithRelations, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        let tool = entity::tool::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(fields.name),
            link: ActiveValue::Set(fields.link),
            description: ActiveValue::Set(fields.description),
            description_detail: ActiveValue::Set(fields.description_detail),
            category: ActiveValue::Set(fields.category),
            tool_type: ActiveValue::Set(fields.tool_type),
            status: ActiveValue::Set(ReviewStatus::Pending.as_str().to_string()),
            submitter_id: ActiveValue::Set(submitter_id),
            views: ActiveValue::Set(0),
            loves: ActiveValue::Set(0),
            collections: ActiveValue::Set(0),
            reject_reason: ActiveValue::Set(None),
            audit_time: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(&txn)
        .await?;

        insert_tags(&txn, tool.id, &fields.tags).await?;
        insert_images(&txn, tool.id, &fields.images).await?;
        entity::tool_contributor::ActiveModel {
            id: ActiveValue::NotSet,
            tool_id: ActiveValue::Set(tool.id),
            user_id: ActiveValue::Set(submitter_id),
        }
        .insert(&txn)
        .await?;

        let mut loaded = load_relations(&txn, vec![tool]).await?;
        txn.commit().await?;

        loaded
            .pop()
            .ok_or_else(|| DbErr::RecordNotFound("tool missing after insert".to_string()))
    }

    /// Replaces the editable fields, tags, and images of a tool and resets it to pending.
    ///
    /// # Returns
    /// - `Ok(Some(ToolWithRelations))` - The updated tool
    /// - `Ok(None)` - No tool with that id
    pub async fn update(
        &self,
        tool_id: i32,
        fields: ToolFields,
    ) -> Result<Option<ToolWithRelations>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(tool) = entity::prelude::Tool::find_by_id(tool_id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active = tool.into_active_model();
        active.name = ActiveValue::Set(fields.name);
        active.link = ActiveValue::Set(fields.link);
        active.description = ActiveValue::Set(fields.description);
        active.description_detail = ActiveValue::Set(fields.description_detail);
        active.category = ActiveValue::Set(fields.category);
        active.tool_type = ActiveValue::Set(fields.tool_type);
        active.status = ActiveValue::Set(ReviewStatus::Pending.as_str().to_string());
        active.reject_reason = ActiveValue::Set(None);
        active.audit_time = ActiveValue::Set(None);
        active.updated_at = ActiveValue::Set(Utc::now());
        let tool = active.update(&txn).await?;

        entity::prelude::ToolTag::delete_many()
            .filter(entity::tool_tag::Column::ToolId.eq(tool_id))
            .exec(&txn)
            .await?;
        entity::prelude::ToolImage::delete_many()
            .filter(entity::tool_image::Column::ToolId.eq(tool_id))
            .exec(&txn)
            .await?;
        insert_tags(&txn, tool_id, &fields.tags).await?;
        insert_images(&txn, tool_id, &fields.images).await?;

        let mut loaded = load_relations(&txn, vec![tool]).await?;
        txn.commit().await?;
        Ok(loaded.pop())
    }

    /// Finds a tool with its join rows, regardless of status.
    pub async fn find_with_relations(
        &self,
        tool_id: i32,
    ) -> Result<Option<ToolWithRelations>, DbErr> {
        let Some(tool) = entity::prelude::Tool::find_by_id(tool_id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(load_relations(self.db, vec![tool]).await?.pop())
    }

    /// Lists approved tools matching any of the given categories and any of the given tags.
    ///
    /// Empty filter lists match everything.
    pub async fn list(&self, filter: ToolListFilter) -> Result<Vec<ToolWithRelations>, DbErr> {
        let mut query = approved();

        if !filter.categories.is_empty() {
            query = query.filter(entity::tool::Column::Category.is_in(filter.categories));
        }
        if !filter.tags.is_empty() {
            let tagged: Vec<i32> = entity::prelude::ToolTag::find()
                .filter(entity::tool_tag::Column::Tag.is_in(filter.tags))
                .all(self.db)
                .await?
                .into_iter()
                .map(|t| t.tool_id)
                .collect();
            if tagged.is_empty() {
                return Ok(Vec::new());
            }
            query = query.filter(entity::tool::Column::Id.is_in(tagged));
        }

        let tools = page(query, filter.sort, filter.page).all(self.db).await?;
        load_relations(self.db, tools).await
    }

    /// Searches approved tools whose name or description contains the keyword.
    pub async fn search(
        &self,
        keyword: &str,
        cursor: CursorPage,
    ) -> Result<Vec<ToolWithRelations>, DbErr> {
        let query = approved().filter(
            Condition::any()
                .add(entity::tool::Column::Name.contains(keyword))
                .add(entity::tool::Column::Description.contains(keyword)),
        );

        let tools = page(query, ListSort::Newest, cursor).all(self.db).await?;
        load_relations(self.db, tools).await
    }
}

fn approved() -> Select<entity::tool::Entity> {
    entity::prelude::Tool::find()
        .filter(entity::tool::Column::Status.eq(ReviewStatus::Approved.as_str()))
}

/// Applies the sort key, the id cursor, and the page size.
fn page(
    query: Select<entity::tool::Entity>,
    sort: ListSort,
    cursor: CursorPage,
) -> Select<entity::tool::Entity> {
    let mut query = query;
    if let Some(before) = cursor.cursor {
        query = query.filter(entity::tool::Column::Id.lt(before));
    }

    let query = match sort {
        ListSort::Newest => query.order_by_desc(entity::tool::Column::CreatedAt),
        ListSort::Views => query.order_by_desc(entity::tool::Column::Views),
        ListSort::Loves => query.order_by_desc(entity::tool::Column::Loves),
        ListSort::Collections => query.order_by_desc(entity::tool::Column::Collections),
    };

    query
        .order_by_desc(entity::tool::Column::Id)
        .limit(cursor.page_size)
}

async fn insert_tags<C: ConnectionTrait>(conn: &C, tool_id: i32, tags: &[String]) -> Result<(), DbErr> {
    if tags.is_empty() {
        return Ok(());
    }

    entity::prelude::ToolTag::insert_many(tags.iter().map(|tag| entity::tool_tag::ActiveModel {
        id: ActiveValue::NotSet,
        tool_id: ActiveValue::Set(tool_id),
        tag: ActiveValue::Set(tag.clone()),
    }))
    .exec(conn)
    .await?;
    Ok(())
}

async fn insert_images<C: ConnectionTrait>(
    conn: &C,
    tool_id: i32,
    images: &[String],
) -> Result<(), DbErr> {
    if images.is_empty() {
        return Ok(());
    }

    entity::prelude::ToolImage::insert_many(images.iter().enumerate().map(|(index, url)| {
        entity::tool_image::ActiveModel {
            id: ActiveValue::NotSet,
            tool_id: ActiveValue::Set(tool_id),
            image_url: ActiveValue::Set(url.clone()),
            sort_order: ActiveValue::Set(index as i32),
        }
    }))
    .exec(conn)
    .await?;
    Ok(())
}

/// Attaches tags, images, and contributors to each tool with one query per join table.
async fn load_relations<C: ConnectionTrait>(
    conn: &C,
    tools: Vec<entity::tool::Model>,
) -> Result<Vec<ToolWithRelations>, DbErr> {
    if tools.is_empty() {
        return Ok(Vec::new());
    }
    let ids: Vec<i32> = tools.iter().map(|t| t.id).collect();

    let mut tags: HashMap<i32, Vec<String>> = HashMap::new();
    for tag in entity::prelude::ToolTag::find()
        .filter(entity::tool_tag::Column::ToolId.is_in(ids.clone()))
        .order_by_asc(entity::tool_tag::Column::Id)
        .all(conn)
        .await?
    {
        tags.entry(tag.tool_id).or_default().push(tag.tag);
    }

    let mut images: HashMap<i32, Vec<String>> = HashMap::new();
    for image in entity::prelude::ToolImage::find()
        .filter(entity::tool_image::Column::ToolId.is_in(ids.clone()))
        .order_by_asc(entity::tool_image::Column::SortOrder)
        .order_by_asc(entity::tool_image::Column::Id)
        .all(conn)
        .await?
    {
        images.entry(image.tool_id).or_default().push(image.image_url);
    }

    let contributor_rows = entity::prelude::ToolContributor::find()
        .filter(entity::tool_contributor::Column::ToolId.is_in(ids))
        .order_by_asc(entity::tool_contributor::Column::Id)
        .all(conn)
        .await?;
    let user_ids: Vec<i32> = contributor_rows.iter().map(|c| c.user_id).collect();
    let users = load_users(conn, &user_ids).await?;
    let mut contributors: HashMap<i32, Vec<entity::user::Model>> = HashMap::new();
    for row in contributor_rows {
        if let Some(user) = users.get(&row.user_id) {
            contributors.entry(row.tool_id).or_default().push(user.clone());
        }
    }

    Ok(tools
        .into_iter()
        .map(|tool| ToolWithRelations {
            tags: tags.remove(&tool.id).unwrap_or_default(),
            images: images.remove(&tool.id).unwrap_or_default(),
            contributors: contributors.remove(&tool.id).unwrap_or_default(),
            tool,
        })
        .collect())
}
