//! Resource kinds and the state shared by tools, courses, and projects.
//!
//! Likes, collections, views, comments, and review status work the same way for all three
//! kinds. `ResourceKind` is the discriminator stored in the `resource_type` columns and
//! used to dispatch to the right table.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        admin::{PendingItemDto, ReviewResultDto},
        api::CursorPageDto,
        user::{ResourceSummaryDto, StatusChangeDto},
    },
    server::model::{comment::CommentPage, engagement::EngagementFlags},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Tool,
    Course,
    Project,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [Self::Tool, Self::Course, Self::Project];

    /// Value stored in `resource_type` columns.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tool => "tool",
            Self::Course => "course",
            Self::Project => "project",
        }
    }

    /// Parses a kind name as it appears in paths and queries. Plurals are accepted.
    pub fn from_name(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "tool" | "tools" => Some(Self::Tool),
            "course" | "courses" => Some(Self::Course),
            "project" | "projects" => Some(Self::Project),
            _ => None,
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Moderation state of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

/// Denormalized counter columns present on every resource table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    Views,
    Loves,
    Collections,
}

/// Current counter values of one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counters {
    pub views: i32,
    pub loves: i32,
    pub collections: i32,
}

/// Sort order requested by a public listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListSort {
    /// `created_at` descending, then id descending.
    #[default]
    Newest,
    Views,
    Loves,
    Collections,
}

impl ListSort {
    /// Unknown or missing keys fall back to newest first.
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("views") => Self::Views,
            Some("loves") | Some("likes") => Self::Loves,
            Some("collections") => Self::Collections,
            _ => Self::Newest,
        }
    }
}

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Cursor page request shared by the three public listings.
#[derive(Debug, Clone, Copy)]
pub struct CursorPage {
    /// Only ids strictly below the cursor are returned.
    pub cursor: Option<i32>,
    pub page_size: u64,
}

impl CursorPage {
    pub fn new(cursor: Option<i32>, page_size: Option<u64>) -> Self {
        Self {
            cursor,
            page_size: page_size
                .filter(|size| *size > 0)
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .min(MAX_PAGE_SIZE),
        }
    }

    /// Next cursor when a full page came back, `None` once the listing is exhausted.
    pub fn next_cursor(&self, ids: &[i32]) -> Option<i32> {
        if (ids.len() as u64) < self.page_size {
            return None;
        }
        ids.iter().min().copied()
    }
}

/// One page of a cursor-paginated listing.
#[derive(Debug, Clone)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub next_cursor: Option<i32>,
}

impl<T> Listing<T> {
    /// Builds the page, deriving the next cursor from the ids of the returned items.
    pub fn new(items: Vec<T>, page: &CursorPage, id_of: impl Fn(&T) -> i32) -> Self {
        let ids: Vec<i32> = items.iter().map(id_of).collect();
        Self {
            next_cursor: page.next_cursor(&ids),
            items,
        }
    }

    pub fn into_dto<D>(self, convert: impl FnMut(T) -> D) -> CursorPageDto<D> {
        CursorPageDto {
            items: self.items.into_iter().map(convert).collect(),
            next_cursor: self.next_cursor,
        }
    }
}

/// Splits a comma-separated filter into trimmed, non-empty values.
pub fn split_filter(value: Option<&str>) -> Vec<String> {
    value
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// A resource of any kind reduced to the fields shown in collections, submission lists,
/// and the review queue.
#[derive(Debug, Clone)]
pub struct ResourceSummary {
    pub kind: ResourceKind,
    pub id: i32,
    pub name: String,
    pub cover: Option<String>,
    pub status: String,
    pub submitter_id: i32,
    pub counters: Counters,
    pub reject_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub audit_time: Option<DateTime<Utc>>,
}

impl ResourceSummary {
    pub fn from_tool(tool: entity::tool::Model, cover: Option<String>) -> Self {
        Self {
            kind: ResourceKind::Tool,
            id: tool.id,
            name: tool.name,
            cover,
            status: tool.status,
            submitter_id: tool.submitter_id,
            counters: Counters {
                views: tool.views,
                loves: tool.loves,
                collections: tool.collections,
            },
            reject_reason: tool.reject_reason,
            created_at: tool.created_at,
            audit_time: tool.audit_time,
        }
    }

    pub fn from_course(course: entity::course::Model) -> Self {
        Self {
            kind: ResourceKind::Course,
            id: course.id,
            name: course.name,
            cover: course.cover,
            status: course.status,
            submitter_id: course.submitter_id,
            counters: Counters {
                views: course.views,
                loves: course.loves,
                collections: course.collections,
            },
            reject_reason: course.reject_reason,
            created_at: course.created_at,
            audit_time: course.audit_time,
        }
    }

    pub fn from_project(project: entity::project::Model) -> Self {
        Self {
            kind: ResourceKind::Project,
            id: project.id,
            name: project.name,
            cover: project.cover,
            status: project.status,
            submitter_id: project.submitter_id,
            counters: Counters {
                views: project.views,
                loves: project.loves,
                collections: project.collections,
            },
            reject_reason: project.reject_reason,
            created_at: project.created_at,
            audit_time: project.audit_time,
        }
    }

    pub fn into_dto(self) -> ResourceSummaryDto {
        ResourceSummaryDto {
            resource_id: self.id,
            resource_type: self.kind.as_str().to_string(),
            name: self.name,
            cover: self.cover,
            status: self.status,
            views: self.counters.views,
            loves: self.counters.loves,
            collections: self.counters.collections,
            reject_reason: self.reject_reason,
            submit_time: self.created_at,
            audit_time: self.audit_time,
        }
    }

    pub fn into_pending_dto(self) -> PendingItemDto {
        PendingItemDto {
            resource_id: self.id,
            resource_type: self.kind.as_str().to_string(),
            name: self.name,
            submitter_id: self.submitter_id,
            status: self.status,
            submit_time: self.created_at,
        }
    }
}

/// Result of a status transition, as written to the status log.
#[derive(Debug, Clone)]
pub struct StatusChange {
    pub kind: ResourceKind,
    pub resource_id: i32,
    pub old_status: String,
    pub new_status: String,
    pub reject_reason: Option<String>,
    pub changed_at: DateTime<Utc>,
}

impl StatusChange {
    pub fn into_status_dto(self) -> StatusChangeDto {
        StatusChangeDto {
            resource_id: self.resource_id,
            resource_type: self.kind.as_str().to_string(),
            old_status: self.old_status,
            new_status: self.new_status,
            operate_time: self.changed_at,
        }
    }

    pub fn into_review_dto(self) -> ReviewResultDto {
        ReviewResultDto {
            resource_id: self.resource_id,
            resource_type: self.kind.as_str().to_string(),
            old_status: self.old_status,
            status: self.new_status,
            audit_time: self.changed_at,
            reject_reason: self.reject_reason,
        }
    }
}

/// A resource loaded for its detail page, with the viewer's flags and the first page of
/// comments.
#[derive(Debug, Clone)]
pub struct ResourceDetail<T> {
    pub resource: T,
    pub flags: EngagementFlags,
    pub comments: CommentPage,
}
