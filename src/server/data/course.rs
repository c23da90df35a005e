//! Course data repository.
//!
//! Courses have teachers, categories, and resources. Resources are either `url` links or
//! `upload` files; both become visible as soon as they are added.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, Select, TransactionTrait,
};

use crate::server::{
    data::user::load_users,
    model::{
        course::{
            CourseFields, CourseListFilter, CourseWithRelations, NewCourseResource,
            RESOURCE_KIND_UPLOAD, RESOURCE_KIND_URL,
        },
        resource::{CursorPage, ListSort, ReviewStatus},
    },
};

pub struct CourseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a pending course with teachers, categories, and one `url` resource per link.
    pub async fn create(
        &self,
        fields: CourseFields,
        submitter_id: i32,
    ) -> Result<CourseWithRelations, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        let course = entity::course::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(fields.name),
            semester: ActiveValue::Set(fields.semester),
            credit: ActiveValue::Set(fields.credit),
            cover: ActiveValue::Set(fields.cover),
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

        if !fields.teachers.is_empty() {
            entity::prelude::CourseTeacher::insert_many(fields.teachers.into_iter().map(|name| {
                entity::course_teacher::ActiveModel {
                    id: ActiveValue::NotSet,
                    course_id: ActiveValue::Set(course.id),
                    name: ActiveValue::Set(name),
                }
            }))
            .exec(&txn)
            .await?;
        }
        if !fields.categories.is_empty() {
            entity::prelude::CourseCategory::insert_many(fields.categories.into_iter().map(
                |category| entity::course_category::ActiveModel {
                    id: ActiveValue::NotSet,
                    course_id: ActiveValue::Set(course.id),
                    category: ActiveValue::Set(category),
                },
            ))
            .exec(&txn)
            .await?;
        }
        for link in fields.resource_links {
            insert_resource(
                &txn,
                NewCourseResource {
                    course_id: course.id,
                    kind: RESOURCE_KIND_URL,
                    title: link.clone(),
                    description: None,
                    url: link,
                    uploader_id: submitter_id,
                },
            )
            .await?;
        }

        let mut loaded = load_relations(&txn, vec![course]).await?;
        txn.commit().await?;

        loaded
            .pop()
            .ok_or_else(|| DbErr::RecordNotFound("course missing after insert".to_string()))
    }

    /// Finds a course with its join rows, regardless of status.
    pub async fn find_with_relations(
        &self,
        course_id: i32,
    ) -> Result<Option<CourseWithRelations>, DbErr> {
        let Some(course) = entity::prelude::Course::find_by_id(course_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(load_relations(self.db, vec![course]).await?.pop())
    }

    /// Lists approved courses, optionally restricted to one semester and any of the given
    /// categories.
    pub async fn list(&self, filter: CourseListFilter) -> Result<Vec<CourseWithRelations>, DbErr> {
        let mut query = approved();

        if let Some(semester) = filter.semester {
            query = query.filter(entity::course::Column::Semester.eq(semester));
        }
        match self.category_matches(filter.categories).await? {
            CategoryMatch::Any => {}
            CategoryMatch::Ids(ids) => query = query.filter(entity::course::Column::Id.is_in(ids)),
            CategoryMatch::None => return Ok(Vec::new()),
        }

        let courses = page(query, filter.sort, filter.page).all(self.db).await?;
        load_relations(self.db, courses).await
    }

    /// Searches approved courses by name, optionally restricted to categories.
    pub async fn search(
        &self,
        keyword: &str,
        categories: Vec<String>,
        cursor: CursorPage,
    ) -> Result<Vec<CourseWithRelations>, DbErr> {
        let mut query = approved().filter(entity::course::Column::Name.contains(keyword));
        match self.category_matches(categories).await? {
            CategoryMatch::Any => {}
            CategoryMatch::Ids(ids) => query = query.filter(entity::course::Column::Id.is_in(ids)),
            CategoryMatch::None => return Ok(Vec::new()),
        }

        let courses = page(query, ListSort::Newest, cursor).all(self.db).await?;
        load_relations(self.db, courses).await
    }

    /// Attaches a resource to a course.
    pub async fn add_resource(
        &self,
        resource: NewCourseResource,
    ) -> Result<entity::course_resource::Model, DbErr> {
        insert_resource(self.db, resource).await
    }

    /// Resources of a course in the order they were added.
    pub async fn resources(
        &self,
        course_id: i32,
    ) -> Result<Vec<entity::course_resource::Model>, DbErr> {
        entity::prelude::CourseResource::find()
            .filter(entity::course_resource::Column::CourseId.eq(course_id))
            .order_by_asc(entity::course_resource::Column::CreatedAt)
            .order_by_asc(entity::course_resource::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds an `upload` resource belonging to the given course.
    pub async fn find_upload(
        &self,
        course_id: i32,
        resource_id: i32,
    ) -> Result<Option<entity::course_resource::Model>, DbErr> {
        entity::prelude::CourseResource::find_by_id(resource_id)
            .filter(entity::course_resource::Column::CourseId.eq(course_id))
            .filter(entity::course_resource::Column::Kind.eq(RESOURCE_KIND_UPLOAD))
            .one(self.db)
            .await
    }

    async fn category_matches(&self, categories: Vec<String>) -> Result<CategoryMatch, DbErr> {
        if categories.is_empty() {
            return Ok(CategoryMatch::Any);
        }

        let ids: Vec<i32> = entity::prelude::CourseCategory::find()
            .filter(entity::course_category::Column::Category.is_in(categories))
            .all(self.db)
            .await?
            .into_iter()
            .map(|c| c.course_id)
            .collect();

        Ok(if ids.is_empty() {
            CategoryMatch::None
        } else {
            CategoryMatch::Ids(ids)
        })
    }
}

enum CategoryMatch {
    Any,
    Ids(Vec<i32>),
    None,
}

fn approved() -> Select<entity::course::Entity> {
    entity::prelude::Course::find()
        .filter(entity::course::Column::Status.eq(ReviewStatus::Approved.as_str()))
}

fn page(
    query: Select<entity::course::Entity>,
    sort: ListSort,
    cursor: CursorPage,
) -> Select<entity::course::Entity> {
    let mut query = query;
    if let Some(before) = cursor.cursor {
        query = query.filter(entity::course::Column::Id.lt(before));
    }

    let query = match sort {
        ListSort::Newest => query.order_by_desc(entity::course::Column::CreatedAt),
        ListSort::Views => query.order_by_desc(entity::course::Column::Views),
        ListSort::Loves => query.order_by_desc(entity::course::Column::Loves),
        ListSort::Collections => query.order_by_desc(entity::course::Column::Collections),
    };

    query
        .order_by_desc(entity::course::Column::Id)
        .limit(cursor.page_size)
}

async fn insert_resource<C: ConnectionTrait>(
    conn: &C,
    resource: NewCourseResource,
) -> Result<entity::course_resource::Model, DbErr> {
    entity::course_resource::ActiveModel {
        id: ActiveValue::NotSet,
        course_id: ActiveValue::Set(resource.course_id),
        kind: ActiveValue::Set(resource.kind.to_string()),
        title: ActiveValue::Set(resource.title),
        description: ActiveValue::Set(resource.description),
        url: ActiveValue::Set(resource.url),
        uploader_id: ActiveValue::Set(resource.uploader_id),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(conn)
    .await
}

async fn load_relations<C: ConnectionTrait>(
    conn: &C,
    courses: Vec<entity::course::Model>,
) -> Result<Vec<CourseWithRelations>, DbErr> {
    if courses.is_empty() {
        return Ok(Vec::new());
    }
    let ids: Vec<i32> = courses.iter().map(|c| c.id).collect();

    let mut teachers: HashMap<i32, Vec<String>> = HashMap::new();
    for teacher in entity::prelude::CourseTeacher::find()
        .filter(entity::course_teacher::Column::CourseId.is_in(ids.clone()))
        .order_by_asc(entity::course_teacher::Column::Id)
        .all(conn)
        .await?
    {
        teachers.entry(teacher.course_id).or_default().push(teacher.name);
    }

    let mut categories: HashMap<i32, Vec<String>> = HashMap::new();
    for category in entity::prelude::CourseCategory::find()
        .filter(entity::course_category::Column::CourseId.is_in(ids.clone()))
        .order_by_asc(entity::course_category::Column::Id)
        .all(conn)
        .await?
    {
        categories
            .entry(category.course_id)
            .or_default()
            .push(category.category);
    }

    let mut resources: HashMap<i32, Vec<entity::course_resource::Model>> = HashMap::new();
    for resource in entity::prelude::CourseResource::find()
        .filter(entity::course_resource::Column::CourseId.is_in(ids))
        .order_by_asc(entity::course_resource::Column::CreatedAt)
        .order_by_asc(entity::course_resource::Column::Id)
        .all(conn)
        .await?
    {
        resources.entry(resource.course_id).or_default().push(resource);
    }

    let user_ids: Vec<i32> = courses
        .iter()
        .map(|c| c.submitter_id)
        .chain(resources.values().flatten().map(|r| r.uploader_id))
        .collect();
    let users = load_users(conn, &user_ids).await?;

    Ok(courses
        .into_iter()
        .map(|course| {
            let resources = resources.remove(&course.id).unwrap_or_default();

            let mut contributor_ids = vec![course.submitter_id];
            for resource in &resources {
                if !contributor_ids.contains(&resource.uploader_id) {
                    contributor_ids.push(resource.uploader_id);
                }
            }
            let contributors = contributor_ids
                .iter()
                .filter_map(|id| users.get(id).cloned())
                .collect();

            CourseWithRelations {
                teachers: teachers.remove(&course.id).unwrap_or_default(),
                categories: categories.remove(&course.id).unwrap_or_default(),
                resources,
                contributors,
                course,
            }
        })
        .collect())
}
