//! Course listing, detail, submission, and course resources.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::course::CourseRepository,
    error::AppError,
    model::{
        course::{
            CourseFields, CourseListFilter, CourseWithRelations, NewCourseResource,
            RESOURCE_KIND_UPLOAD, RESOURCE_KIND_URL,
        },
        resource::{CursorPage, Listing, ResourceDetail, ResourceKind},
        user::User,
    },
    service::{
        resource::{not_found, ResourceService},
        tool::required_keyword,
    },
    util::image::PUBLIC_PREFIX,
};

const KIND: ResourceKind = ResourceKind::Course;

/// Input to [`CourseService::add_resource`]. Exactly one of `url` and `file` must be set.
pub struct AddResourceParams {
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub file: Option<String>,
}

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        filter: CourseListFilter,
    ) -> Result<Listing<CourseWithRelations>, AppError> {
        let page = filter.page;
        let courses = CourseRepository::new(self.db).list(filter).await?;

        Ok(Listing::new(courses, &page, |c| c.course.id))
    }

    pub async fn search(
        &self,
        keyword: &str,
        categories: Vec<String>,
        page: CursorPage,
    ) -> Result<Listing<CourseWithRelations>, AppError> {
        let keyword = required_keyword(keyword)?;
        let courses = CourseRepository::new(self.db)
            .search(keyword, categories, page)
            .await?;

        Ok(Listing::new(courses, &page, |c| c.course.id))
    }

    pub async fn detail(
        &self,
        id: i32,
        viewer: Option<&User>,
    ) -> Result<ResourceDetail<CourseWithRelations>, AppError> {
        let course = CourseRepository::new(self.db)
            .find_with_relations(id)
            .await?
            .ok_or_else(|| not_found(KIND))?;

        let resources = ResourceService::new(self.db);
        resources
            .ensure_visible(KIND, id, &course.course.status, viewer)
            .await?;
        let (flags, comments) = resources.detail_extras(KIND, id, viewer).await?;

        Ok(ResourceDetail {
            resource: course,
            flags,
            comments,
        })
    }

    pub async fn submit(
        &self,
        fields: CourseFields,
        submitter_id: i32,
    ) -> Result<CourseWithRelations, AppError> {
        if fields.name.is_empty() || fields.semester.is_empty() {
            return Err(AppError::BadRequest(
                "name and semester are required".to_string(),
            ));
        }
        if fields.credit < 0.0 {
            return Err(AppError::BadRequest("credit must not be negative".to_string()));
        }

        let course = CourseRepository::new(self.db)
            .create(fields, submitter_id)
            .await?;

        tracing::info!("Course {} submitted by user {}", course.course.id, submitter_id);

        Ok(course)
    }

    pub async fn resources(
        &self,
        course_id: i32,
        viewer: Option<&User>,
    ) -> Result<Vec<entity::course_resource::Model>, AppError> {
        ResourceService::new(self.db)
            .require_visible(KIND, course_id, viewer)
            .await?;

        Ok(CourseRepository::new(self.db).resources(course_id).await?)
    }

    /// Attaches a link or an uploaded file to a course. The resource is visible at once.
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored resource
    /// - `Err(AppError::BadRequest)` - Missing title, both or neither of url/file, or a file
    ///   path outside the upload directory
    /// - `Err(AppError::NotFound)` - Course missing or hidden from the uploader
    pub async fn add_resource(
        &self,
        course_id: i32,
        uploader: &User,
        params: AddResourceParams,
    ) -> Result<entity::course_resource::Model, AppError> {
        let title = params.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::BadRequest("title is required".to_string()));
        }

        let url = params.url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty());
        let file = params.file.map(|f| f.trim().to_string()).filter(|f| !f.is_empty());
        let (kind, url) = match (url, file) {
            (Some(url), None) => (RESOURCE_KIND_URL, url),
            (None, Some(file)) => {
                if !file.starts_with(&format!("{}/", PUBLIC_PREFIX)) {
                    return Err(AppError::BadRequest(
                        "file must be a previously uploaded path".to_string(),
                    ));
                }
                (RESOURCE_KIND_UPLOAD, file)
            }
            _ => {
                return Err(AppError::BadRequest(
                    "exactly one of url and file is required".to_string(),
                ))
            }
        };

        ResourceService::new(self.db)
            .require_visible(KIND, course_id, Some(uploader))
            .await?;

        let resource = CourseRepository::new(self.db)
            .add_resource(NewCourseResource {
                course_id,
                kind,
                title,
                description: params.description.filter(|d| !d.trim().is_empty()),
                url,
                uploader_id: uploader.id,
            })
            .await?;

        Ok(resource)
    }

    /// Public URL of an uploaded textbook belonging to the course.
    pub async fn download(
        &self,
        course_id: i32,
        resource_id: i32,
        viewer: &User,
    ) -> Result<String, AppError> {
        ResourceService::new(self.db)
            .require_visible(KIND, course_id, Some(viewer))
            .await?;

        CourseRepository::new(self.db)
            .find_upload(course_id, resource_id)
            .await?
            .map(|resource| resource.url)
            .ok_or_else(|| AppError::NotFound("textbook not found".to_string()))
    }
}
