//! Tool domain models and parameters.

use crate::{
    model::{
        api::SubmissionReceiptDto,
        tool::{SubmitToolDto, ToolDetailDto, ToolSummaryDto},
    },
    server::model::{
        comment::CommentPage,
        engagement::EngagementFlags,
        resource::{CursorPage, ListSort, ResourceKind},
        user::brief_dto,
    },
};

/// Editable tool fields, shared by submit and update.
#[derive(Debug, Clone)]
pub struct ToolFields {
    pub name: String,
    pub link: String,
    pub description: String,
    pub description_detail: String,
    pub category: String,
    pub tool_type: Option<String>,
    pub tags: Vec<String>,
    /// Already-localized image URLs, in display order.
    pub images: Vec<String>,
}

impl ToolFields {
    /// Builds fields from a submission body. `images` must already be localized.
    pub fn from_dto(dto: SubmitToolDto, images: Vec<String>) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            link: dto.link.trim().to_string(),
            description: dto.description,
            description_detail: dto.description_detail,
            category: dto.category.trim().to_string(),
            tool_type: dto.tool_type.filter(|t| !t.trim().is_empty()),
            tags: dto
                .tags
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            images,
        }
    }
}

/// Filters for the public tool listing.
#[derive(Debug, Clone)]
pub struct ToolListFilter {
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub sort: ListSort,
    pub page: CursorPage,
}

/// A tool with its join-table rows.
#[derive(Debug, Clone)]
pub struct ToolWithRelations {
    pub tool: entity::tool::Model,
    pub tags: Vec<String>,
    pub images: Vec<String>,
    pub contributors: Vec<entity::user::Model>,
}

impl ToolWithRelations {
    pub fn into_summary_dto(self) -> ToolSummaryDto {
        let tool = self.tool;
        ToolSummaryDto {
            id: tool.id,
            name: tool.name,
            link: tool.link,
            description: tool.description,
            category: tool.category,
            tool_type: tool.tool_type,
            tags: self.tags,
            cover: self.images.into_iter().next(),
            views: tool.views,
            loves: tool.loves,
            collections: tool.collections,
            created_at: tool.created_at,
        }
    }

    pub fn into_detail_dto(self, flags: EngagementFlags, comments: CommentPage) -> ToolDetailDto {
        let contributors = self.contributors.iter().map(brief_dto).collect();
        let tool = self.tool;
        ToolDetailDto {
            id: tool.id,
            name: tool.name,
            link: tool.link,
            description: tool.description,
            description_detail: tool.description_detail,
            category: tool.category,
            tool_type: tool.tool_type,
            status: tool.status,
            submitter_id: tool.submitter_id,
            tags: self.tags,
            images: self.images,
            contributors,
            views: tool.views,
            loves: tool.loves,
            collections: tool.collections,
            isliked: flags.isliked,
            iscollected: flags.iscollected,
            comment_count: comments.total,
            comments: comments.into_dto().items,
            created_at: tool.created_at,
            updated_at: tool.updated_at,
        }
    }

    /// Wraps the tool in a submission receipt.
    pub fn into_receipt_dto(self) -> SubmissionReceiptDto<ToolSummaryDto> {
        let id = self.tool.id;
        let status = self.tool.status.clone();
        let submitted = self.tool.updated_at;
        let audit_time = self.tool.audit_time;
        let reject_reason = self.tool.reject_reason.clone();
        SubmissionReceiptDto {
            resource_id: id,
            resource_type: ResourceKind::Tool.as_str().to_string(),
            resource: self.into_summary_dto(),
            audit_status: status,
            submit_time: submitted,
            audit_time,
            reject_reason,
        }
    }
}
