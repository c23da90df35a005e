use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{comment::CommentDto, user::UserBriefDto};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CourseSummaryDto {
    pub id: i32,
    pub name: String,
    pub semester: String,
    pub credit: f64,
    pub cover: Option<String>,
    pub teachers: Vec<String>,
    pub categories: Vec<String>,
    pub views: i32,
    pub loves: i32,
    pub collections: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct CourseResourceDto {
    pub id: i32,
    /// `url` or `upload`.
    pub kind: String,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub uploader_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CourseDetailDto {
    pub id: i32,
    pub name: String,
    pub semester: String,
    pub credit: f64,
    pub cover: Option<String>,
    pub status: String,
    pub submitter_id: i32,
    pub teachers: Vec<String>,
    pub categories: Vec<String>,
    pub url_resources: Vec<CourseResourceDto>,
    pub upload_resources: Vec<CourseResourceDto>,
    /// The submitter followed by every distinct resource uploader.
    pub contributors: Vec<UserBriefDto>,
    pub views: i32,
    pub loves: i32,
    pub collections: i32,
    pub isliked: bool,
    pub iscollected: bool,
    pub comment_count: u64,
    pub comments: Vec<CommentDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SubmitCourseDto {
    pub name: String,
    pub semester: String,
    #[serde(default)]
    pub credit: f64,
    #[serde(default, alias = "teacher")]
    pub teachers: Vec<String>,
    #[serde(default, alias = "category")]
    pub categories: Vec<String>,
    pub cover: Option<String>,
    /// Links attached to the course as `url` resources.
    pub resources: Option<Vec<String>>,
}

/// Exactly one of `url` and `file` must be present.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct AddCourseResourceDto {
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
    /// Path of a previously uploaded file under `/uploads`.
    pub file: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct DownloadDto {
    pub url: String,
}

#[derive(Deserialize, IntoParams)]
pub struct CourseListParams {
    /// Exact semester match.
    pub semester: Option<String>,
    /// Comma-separated categories, any of which may match.
    pub category: Option<String>,
    pub sort: Option<String>,
    pub cursor: Option<i32>,
    pub page_size: Option<u64>,
}

#[derive(Deserialize, IntoParams)]
pub struct CourseSearchParams {
    pub keyword: String,
    pub category: Option<String>,
    pub cursor: Option<i32>,
    pub page_size: Option<u64>,
}
