use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{comment::CommentDto, user::UserBriefDto};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ProjectSummaryDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub category: String,
    pub cover: Option<String>,
    pub tech_stack: Vec<String>,
    pub views: i32,
    pub loves: i32,
    pub collections: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ProjectDetailDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub detail: String,
    pub github: Option<String>,
    pub category: String,
    pub cover: Option<String>,
    pub status: String,
    pub submitter_id: i32,
    pub images: Vec<String>,
    pub tech_stack: Vec<String>,
    pub authors: Vec<UserBriefDto>,
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
pub struct SubmitProjectDto {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub detail: String,
    pub github: Option<String>,
    pub category: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    pub images: Option<Vec<String>>,
}

#[derive(Deserialize, IntoParams)]
pub struct ProjectListParams {
    /// Comma-separated categories, any of which may match.
    pub category: Option<String>,
    /// Comma-separated tech-stack entries, any of which may match.
    pub tech: Option<String>,
    pub sort: Option<String>,
    pub cursor: Option<i32>,
    pub page_size: Option<u64>,
}

#[derive(Deserialize, IntoParams)]
pub struct ProjectSearchParams {
    pub keyword: String,
    pub cursor: Option<i32>,
    pub page_size: Option<u64>,
}
