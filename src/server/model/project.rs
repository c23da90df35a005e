//! Project domain models and parameters.

use crate::{
    model::{
        api::SubmissionReceiptDto,
        project::{ProjectDetailDto, ProjectSummaryDto, SubmitProjectDto},
    },
    server::model::{
        comment::CommentPage,
        engagement::EngagementFlags,
        resource::{CursorPage, ListSort, ResourceKind},
        user::brief_dto,
    },
};

#[derive(Debug, Clone)]
pub struct ProjectFields {
    pub name: String,
    pub description: String,
    pub detail: String,
    pub github: Option<String>,
    pub category: String,
    pub tech_stack: Vec<String>,
    /// Already-localized images; the first one becomes the cover.
    pub images: Vec<String>,
}

impl ProjectFields {
    pub fn from_dto(dto: SubmitProjectDto, images: Vec<String>) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description,
            detail: dto.detail,
            github: dto.github.filter(|g| !g.trim().is_empty()),
            category: dto.category.trim().to_string(),
            tech_stack: dto
                .tech_stack
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            images,
        }
    }

    pub fn cover(&self) -> Option<String> {
        self.images.first().cloned()
    }
}

#[derive(Debug, Clone)]
pub struct ProjectListFilter {
    pub categories: Vec<String>,
    pub tech: Vec<String>,
    pub sort: ListSort,
    pub page: CursorPage,
}

/// A project with its join-table rows.
#[derive(Debug, Clone)]
pub struct ProjectWithRelations {
    pub project: entity::project::Model,
    pub tech_stack: Vec<String>,
    pub images: Vec<String>,
    pub authors: Vec<entity::user::Model>,
}

impl ProjectWithRelations {
    pub fn into_summary_dto(self) -> ProjectSummaryDto {
        let project = self.project;
        ProjectSummaryDto {
            id: project.id,
            name: project.name,
            description: project.description,
            category: project.category,
            cover: project.cover,
            tech_stack: self.tech_stack,
            views: project.views,
            loves: project.loves,
            collections: project.collections,
            created_at: project.created_at,
        }
    }

    pub fn into_detail_dto(
        self,
        flags: EngagementFlags,
        comments: CommentPage,
    ) -> ProjectDetailDto {
        let authors = self.authors.iter().map(brief_dto).collect();
        let project = self.project;
        ProjectDetailDto {
            id: project.id,
            name: project.name,
            description: project.description,
            detail: project.detail,
            github: project.github,
            category: project.category,
            cover: project.cover,
            status: project.status,
            submitter_id: project.submitter_id,
            images: self.images,
            tech_stack: self.tech_stack,
            authors,
            views: project.views,
            loves: project.loves,
            collections: project.collections,
            isliked: flags.isliked,
            iscollected: flags.iscollected,
            comment_count: comments.total,
            comments: comments.into_dto().items,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }

    pub fn into_receipt_dto(self) -> SubmissionReceiptDto<ProjectSummaryDto> {
        let id = self.project.id;
        let status = self.project.status.clone();
        let submitted = self.project.updated_at;
        let audit_time = self.project.audit_time;
        let reject_reason = self.project.reject_reason.clone();
        SubmissionReceiptDto {
            resource_id: id,
            resource_type: ResourceKind::Project.as_str().to_string(),
            resource: self.into_summary_dto(),
            audit_status: status,
            submit_time: submitted,
            audit_time,
            reject_reason,
        }
    }
}
