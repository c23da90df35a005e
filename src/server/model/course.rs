//! Course domain models and parameters.

use crate::{
    model::{
        api::SubmissionReceiptDto,
        course::{CourseDetailDto, CourseResourceDto, CourseSummaryDto, SubmitCourseDto},
    },
    server::model::{
        comment::CommentPage,
        engagement::EngagementFlags,
        resource::{CursorPage, ListSort, ResourceKind},
        user::brief_dto,
    },
};

pub const RESOURCE_KIND_URL: &str = "url";
pub const RESOURCE_KIND_UPLOAD: &str = "upload";

#[derive(Debug, Clone)]
pub struct CourseFields {
    pub name: String,
    pub semester: String,
    pub credit: f64,
    pub cover: Option<String>,
    pub teachers: Vec<String>,
    pub categories: Vec<String>,
    /// Links attached as `url` resources on submit.
    pub resource_links: Vec<String>,
}

impl CourseFields {
    /// Builds fields from a submission body. `cover` must already be localized.
    pub fn from_dto(dto: SubmitCourseDto, cover: Option<String>) -> Self {
        fn clean(values: Vec<String>) -> Vec<String> {
            values
                .into_iter()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .collect()
        }

        Self {
            name: dto.name.trim().to_string(),
            semester: dto.semester.trim().to_string(),
            credit: dto.credit,
            cover,
            teachers: clean(dto.teachers),
            categories: clean(dto.categories),
            resource_links: clean(dto.resources.unwrap_or_default()),
        }
    }
}

/// A resource to attach to an existing course.
#[derive(Debug, Clone)]
pub struct NewCourseResource {
    pub course_id: i32,
    pub kind: &'static str,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub uploader_id: i32,
}

#[derive(Debug, Clone)]
pub struct CourseListFilter {
    pub semester: Option<String>,
    pub categories: Vec<String>,
    pub sort: ListSort,
    pub page: CursorPage,
}

pub fn resource_dto(resource: entity::course_resource::Model) -> CourseResourceDto {
    CourseResourceDto {
        id: resource.id,
        kind: resource.kind,
        title: resource.title,
        description: resource.description,
        url: resource.url,
        uploader_id: resource.uploader_id,
        created_at: resource.created_at,
    }
}

/// A course with its join-table rows.
#[derive(Debug, Clone)]
pub struct CourseWithRelations {
    pub course: entity::course::Model,
    pub teachers: Vec<String>,
    pub categories: Vec<String>,
    pub resources: Vec<entity::course_resource::Model>,
    /// Submitter first, then distinct resource uploaders.
    pub contributors: Vec<entity::user::Model>,
}

impl CourseWithRelations {
    pub fn into_summary_dto(self) -> CourseSummaryDto {
        let course = self.course;
        CourseSummaryDto {
            id: course.id,
            name: course.name,
            semester: course.semester,
            credit: course.credit,
            cover: course.cover,
            teachers: self.teachers,
            categories: self.categories,
            views: course.views,
            loves: course.loves,
            collections: course.collections,
            created_at: course.created_at,
        }
    }

    pub fn into_detail_dto(self, flags: EngagementFlags, comments: CommentPage) -> CourseDetailDto {
        let contributors = self.contributors.iter().map(brief_dto).collect();
        let (uploads, links): (Vec<_>, Vec<_>) = self
            .resources
            .into_iter()
            .partition(|r| r.kind == RESOURCE_KIND_UPLOAD);
        let course = self.course;

        CourseDetailDto {
            id: course.id,
            name: course.name,
            semester: course.semester,
            credit: course.credit,
            cover: course.cover,
            status: course.status,
            submitter_id: course.submitter_id,
            teachers: self.teachers,
            categories: self.categories,
            url_resources: links.into_iter().map(resource_dto).collect(),
            upload_resources: uploads.into_iter().map(resource_dto).collect(),
            contributors,
            views: course.views,
            loves: course.loves,
            collections: course.collections,
            isliked: flags.isliked,
            iscollected: flags.iscollected,
            comment_count: comments.total,
            comments: comments.into_dto().items,
            created_at: course.created_at,
            updated_at: course.updated_at,
        }
    }

    pub fn into_receipt_dto(self) -> SubmissionReceiptDto<CourseSummaryDto> {
        let id = self.course.id;
        let status = self.course.status.clone();
        let submitted = self.course.updated_at;
        let audit_time = self.course.audit_time;
        let reject_reason = self.course.reject_reason.clone();
        SubmissionReceiptDto {
            resource_id: id,
            resource_type: ResourceKind::Course.as_str().to_string(),
            resource: self.into_summary_dto(),
            audit_status: status,
            submit_time: submitted,
            audit_time,
            reject_reason,
        }
    }
}
