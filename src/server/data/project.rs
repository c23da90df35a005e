//! Project data repository.

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
        project::{ProjectFields, ProjectListFilter, ProjectWithRelations},
        resource::{CursorPage, ListSort, ReviewStatus},
    },
};

pub struct ProjectRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a pending project. The submitter becomes its first author and the first image
    /// its cover.
    pub async fn create(
        &self,
        fields: ProjectFields,
        submitter_id: i32,
    ) -> Result<ProjectWithRelations, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();
        let cover = fields.cover();

        let project = entity::project::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(fields.name),
            description: ActiveValue::Set(fields.description),
            detail: ActiveValue::Set(fields.detail),
            github: ActiveValue::Set(fields.github),
            category: ActiveValue::Set(fields.category),
            cover: ActiveValue::Set(cover),
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

        insert_tech_stack(&txn, project.id, &fields.tech_stack).await?;
        insert_images(&txn, project.id, &fields.images).await?;
        entity::project_author::ActiveModel {
            id: ActiveValue::NotSet,
            project_id: ActiveValue::Set(project.id),
            user_id: ActiveValue::Set(submitter_id),
        }
        .insert(&txn)
        .await?;

        let mut loaded = load_relations(&txn, vec![project]).await?;
        txn.commit().await?;

        loaded
            .pop()
            .ok_or_else(|| DbErr::RecordNotFound("project missing after insert".to_string()))
    }

    /// Replaces fields, tech stack, and images, and resets the project to pending. Authors
    /// are kept.
    pub async fn update(
        &self,
        project_id: i32,
        fields: ProjectFields,
    ) -> Result<Option<ProjectWithRelations>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(project) = entity::prelude::Project::find_by_id(project_id)
            .one(&txn)
            .await?
        else {
            return Ok(None);
        };

        let cover = fields.cover();
        let mut active = project.into_active_model();
        active.name = ActiveValue::Set(fields.name);
        active.description = ActiveValue::Set(fields.description);
        active.detail = ActiveValue::Set(fields.detail);
        active.github = ActiveValue::Set(fields.github);
        active.category = ActiveValue::Set(fields.category);
        active.cover = ActiveValue::Set(cover);
        active.status = ActiveValue::Set(ReviewStatus::Pending.as_str().to_string());
        active.reject_reason = ActiveValue::Set(None);
        active.audit_time = ActiveValue::Set(None);
        active.updated_at = ActiveValue::Set(Utc::now());
        let project = active.update(&txn).await?;

        entity::prelude::ProjectTech::delete_many()
            .filter(entity::project_tech::Column::ProjectId.eq(project_id))
            .exec(&txn)
            .await?;
        entity::prelude::ProjectImage::delete_many()
            .filter(entity::project_image::Column::ProjectId.eq(project_id))
            .exec(&txn)
            .await?;
        insert_tech_stack(&txn, project_id, &fields.tech_stack).await?;
        insert_images(&txn, project_id, &fields.images).await?;

        let mut loaded = load_relations(&txn, vec![project]).await?;
        txn.commit().await?;
        Ok(loaded.pop())
    }

    pub async fn find_with_relations(
        &self,
        project_id: i32,
    ) -> Result<Option<ProjectWithRelations>, DbErr> {
        let Some(project) = entity::prelude::Project::find_by_id(project_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(load_relations(self.db, vec![project]).await?.pop())
    }

    /// Lists approved projects matching any category and any tech-stack entry given.
    pub async fn list(
        &self,
        filter: ProjectListFilter,
    ) -> Result<Vec<ProjectWithRelations>, DbErr> {
        let mut query = approved();

        if !filter.categories.is_empty() {
            query = query.filter(entity::project::Column::Category.is_in(filter.categories));
        }
        if !filter.tech.is_empty() {
            let matching: Vec<i32> = entity::prelude::ProjectTech::find()
                .filter(entity::project_tech::Column::Tech.is_in(filter.tech))
                .all(self.db)
                .await?
                .into_iter()
                .map(|t| t.project_id)
                .collect();
            if matching.is_empty() {
                return Ok(Vec::new());
            }
            query = query.filter(entity::project::Column::Id.is_in(matching));
        }

        let projects = page(query, filter.sort, filter.page).all(self.db).await?;
        load_relations(self.db, projects).await
    }

    pub async fn search(
        &self,
        keyword: &str,
        cursor: CursorPage,
    ) -> Result<Vec<ProjectWithRelations>, DbErr> {
        let query = approved().filter(
            Condition::any()
                .add(entity::project::Column::Name.contains(keyword))
                .add(entity::project::Column::Description.contains(keyword)),
        );

        let projects = page(query, ListSort::Newest, cursor).all(self.db).await?;
        load_relations(self.db, projects).await
    }
}

fn approved() -> Select<entity::project::Entity> {
    entity::prelude::Project::find()
        .filter(entity::project::Column::Status.eq(ReviewStatus::Approved.as_str()))
}

fn page(
    query: Select<entity::project::Entity>,
    sort: ListSort,
    cursor: CursorPage,
) -> Select<entity::project::Entity> {
    let mut query = query;
    if let Some(before) = cursor.cursor {
        query = query.filter(entity::project::Column::Id.lt(before));
    }

    let query = match sort {
        ListSort::Newest => query.order_by_desc(entity::project::Column::CreatedAt),
        ListSort::Views => query.order_by_desc(entity::project::Column::Views),
        ListSort::Loves => query.order_by_desc(entity::project::Column::Loves),
        ListSort::Collections => query.order_by_desc(entity::project::Column::Collections),
    };

    query
        .order_by_desc(entity::project::Column::Id)
        .limit(cursor.page_size)
}

async fn insert_tech_stack<C: ConnectionTrait>(
    conn: &C,
    project_id: i32,
    tech_stack: &[String],
) -> Result<(), DbErr> {
    if tech_stack.is_empty() {
        return Ok(());
    }

    entity::prelude::ProjectTech::insert_many(tech_stack.iter().map(|tech| {
        entity::project_tech::ActiveModel {
            id: ActiveValue::NotSet,
            project_id: ActiveValue::Set(project_id),
            tech: ActiveValue::Set(tech.clone()),
        }
    }))
    .exec(conn)
    .await?;
    Ok(())
}

async fn insert_images<C: ConnectionTrait>(
    conn: &C,
    project_id: i32,
    images: &[String],
) -> Result<(), DbErr> {
    if images.is_empty() {
        return Ok(());
    }

    entity::prelude::ProjectImage::insert_many(images.iter().enumerate().map(|(index, url)| {
        entity::project_image::ActiveModel {
            id: ActiveValue::NotSet,
            project_id: ActiveValue::Set(project_id),
            image_url: ActiveValue::Set(url.clone()),
            sort_order: ActiveValue::Set(index as i32),
        }
    }))
    .exec(conn)
    .await?;
    Ok(())
}

async fn load_relations<C: ConnectionTrait>(
    conn: &C,
    projects: Vec<entity::project::Model>,
) -> Result<Vec<ProjectWithRelations>, DbErr> {
    if projects.is_empty() {
        return Ok(Vec::new());
    }
    let ids: Vec<i32> = projects.iter().map(|p| p.id).collect();

    let mut tech_stack: HashMap<i32, Vec<String>> = HashMap::new();
    for tech in entity::prelude::ProjectTech::find()
        .filter(entity::project_tech::Column::ProjectId.is_in(ids.clone()))
        .order_by_asc(entity::project_tech::Column::Id)
        .all(conn)
        .await?
    {
        tech_stack.entry(tech.project_id).or_default().push(tech.tech);
    }

    let mut images: HashMap<i32, Vec<String>> = HashMap::new();
    for image in entity::prelude::ProjectImage::find()
        .filter(entity::project_image::Column::ProjectId.is_in(ids.clone()))
        .order_by_asc(entity::project_image::Column::SortOrder)
        .order_by_asc(entity::project_image::Column::Id)
        .all(conn)
        .await?
    {
        images.entry(image.project_id).or_default().push(image.image_url);
    }

    let author_rows = entity::prelude::ProjectAuthor::find()
        .filter(entity::project_author::Column::ProjectId.is_in(ids))
        .order_by_asc(entity::project_author::Column::Id)
        .all(conn)
        .await?;
    let user_ids: Vec<i32> = author_rows.iter().map(|a| a.user_id).collect();
    let users = load_users(conn, &user_ids).await?;
    let mut authors: HashMap<i32, Vec<entity::user::Model>> = HashMap::new();
    for row in author_rows {
        if let Some(user) = users.get(&row.user_id) {
            authors.entry(row.project_id).or_default().push(user.clone());
        }
    }

    Ok(projects
        .into_iter()
        .map(|project| ProjectWithRelations {
            tech_stack: tech_stack.remove(&project.id).unwrap_or_default(),
            images: images.remove(&project.id).unwrap_or_default(),
            authors: authors.remove(&project.id).unwrap_or_default(),
            project,
        })
        .collect())
}
