//! Project listing, detail, upload, and editing.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::project::ProjectRepository,
    error::AppError,
    model::{
        project::{ProjectFields, ProjectListFilter, ProjectWithRelations},
        resource::{CursorPage, Listing, ResourceDetail, ResourceKind},
        user::User,
    },
    service::{
        resource::{not_found, ResourceService},
        tool::required_keyword,
    },
};

const KIND: ResourceKind = ResourceKind::Project;

pub struct ProjectService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        filter: ProjectListFilter,
    ) -> Result<Listing<ProjectWithRelations>, AppError> {
        let page = filter.page;
        let projects = ProjectRepository::new(self.db).list(filter).await?;

        Ok(Listing::new(projects, &page, |p| p.project.id))
    }

    pub async fn search(
        &self,
        keyword: &str,
        page: CursorPage,
    ) -> Result<Listing<ProjectWithRelations>, AppError> {
        let keyword = required_keyword(keyword)?;
        let projects = ProjectRepository::new(self.db).search(keyword, page).await?;

        Ok(Listing::new(projects, &page, |p| p.project.id))
    }

    pub async fn detail(
        &self,
        id: i32,
        viewer: Option<&User>,
    ) -> Result<ResourceDetail<ProjectWithRelations>, AppError> {
        let project = ProjectRepository::new(self.db)
            .find_with_relations(id)
            .await?
            .ok_or_else(|| not_found(KIND))?;

        let resources = ResourceService::new(self.db);
        resources
            .ensure_visible(KIND, id, &project.project.status, viewer)
            .await?;
        let (flags, comments) = resources.detail_extras(KIND, id, viewer).await?;

        Ok(ResourceDetail {
            resource: project,
            flags,
            comments,
        })
    }

    /// Stores a new project as pending. The caller becomes its first author.
    pub async fn upload(
        &self,
        fields: ProjectFields,
        submitter_id: i32,
    ) -> Result<ProjectWithRelations, AppError> {
        validate(&fields)?;

        let project = ProjectRepository::new(self.db)
            .create(fields, submitter_id)
            .await?;

        tracing::info!(
            "Project {} uploaded by user {}",
            project.project.id,
            submitter_id
        );

        Ok(project)
    }

    /// Replaces a project's content and sends it back to review. Any author may edit.
    pub async fn update(
        &self,
        id: i32,
        fields: ProjectFields,
        user_id: i32,
    ) -> Result<ProjectWithRelations, AppError> {
        validate(&fields)?;

        let resources = ResourceService::new(self.db);
        resources.require_exists(KIND, id).await?;
        resources.ensure_owner(KIND, id, user_id).await?;

        ProjectRepository::new(self.db)
            .update(id, fields)
            .await?
            .ok_or_else(|| not_found(KIND))
    }
}

fn validate(fields: &ProjectFields) -> Result<(), AppError> {
    if fields.name.is_empty() || fields.category.is_empty() {
        return Err(AppError::BadRequest(
            "name and category are required".to_string(),
        ));
    }
    Ok(())
}
