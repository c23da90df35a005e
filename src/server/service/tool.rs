//! Tool listing, detail, submission, and editing.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::tool::ToolRepository,
    error::AppError,
    model::{
        resource::{CursorPage, Listing, ResourceDetail, ResourceKind},
        tool::{ToolFields, ToolListFilter, ToolWithRelations},
        user::User,
    },
    service::resource::{not_found, ResourceService},
};

const KIND: ResourceKind = ResourceKind::Tool;

pub struct ToolService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ToolService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Approved tools matching the filter.
    pub async fn list(&self, filter: ToolListFilter) -> Result<Listing<ToolWithRelations>, AppError> {
        let page = filter.page;
        let tools = ToolRepository::new(self.db).list(filter).await?;

        Ok(Listing::new(tools, &page, |t| t.tool.id))
    }

    pub async fn search(
        &self,
        keyword: &str,
        page: CursorPage,
    ) -> Result<Listing<ToolWithRelations>, AppError> {
        let keyword = required_keyword(keyword)?;
        let tools = ToolRepository::new(self.db).search(keyword, page).await?;

        Ok(Listing::new(tools, &page, |t| t.tool.id))
    }

    /// Loads a tool for its detail page.
    ///
    /// # Returns
    /// - `Ok(ResourceDetail)` - Tool, viewer flags, and first comment page
    /// - `Err(AppError::NotFound)` - Tool missing, or not approved and the viewer is
    ///   neither its submitter nor an admin
    pub async fn detail(
        &self,
        id: i32,
        viewer: Option<&User>,
    ) -> Result<ResourceDetail<ToolWithRelations>, AppError> {
        let tool = ToolRepository::new(self.db)
            .find_with_relations(id)
            .await?
            .ok_or_else(|| not_found(KIND))?;

        let resources = ResourceService::new(self.db);
        resources
            .ensure_visible(KIND, id, &tool.tool.status, viewer)
            .await?;
        let (flags, comments) = resources.detail_extras(KIND, id, viewer).await?;

        Ok(ResourceDetail {
            resource: tool,
            flags,
            comments,
        })
    }

    /// Stores a new tool as pending with the caller as submitter and first contributor.
    pub async fn submit(
        &self,
        fields: ToolFields,
        submitter_id: i32,
    ) -> Result<ToolWithRelations, AppError> {
        validate(&fields)?;

        let tool = ToolRepository::new(self.db)
            .create(fields, submitter_id)
            .await?;

        tracing::info!("Tool {} submitted by user {}", tool.tool.id, submitter_id);

        Ok(tool)
    }

    /// Replaces a tool's content and sends it back to review. Only the submitter may edit.
    pub async fn update(
        &self,
        id: i32,
        fields: ToolFields,
        user_id: i32,
    ) -> Result<ToolWithRelations, AppError> {
        validate(&fields)?;

        let resources = ResourceService::new(self.db);
        resources.require_exists(KIND, id).await?;
        resources.ensure_owner(KIND, id, user_id).await?;

        ToolRepository::new(self.db)
            .update(id, fields)
            .await?
            .ok_or_else(|| not_found(KIND))
    }
}

fn validate(fields: &ToolFields) -> Result<(), AppError> {
    if fields.name.is_empty() || fields.link.is_empty() || fields.category.is_empty() {
        return Err(AppError::BadRequest(
            "name, link and category are required".to_string(),
        ));
    }
    if fields.tags.is_empty() {
        return Err(AppError::BadRequest("at least one tag is required".to_string()));
    }
    Ok(())
}

/// Trims a search keyword, rejecting an empty one.
pub fn required_keyword(keyword: &str) -> Result<&str, AppError> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Err(AppError::BadRequest("keyword is required".to_string()));
    }
    Ok(keyword)
}
