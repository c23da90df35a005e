use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{comment::CommentDto, user::UserBriefDto};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ToolSummaryDto {
    pub id: i32,
    pub name: String,
    pub link: String,
    pub description: String,
    pub category: String,
    pub tool_type: Option<String>,
    pub tags: Vec<String>,
    /// First image, if any.
    pub cover: Option<String>,
    pub views: i32,
    pub loves: i32,
    pub collections: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ToolDetailDto {
    pub id: i32,
    pub name: String,
    pub link: String,
    pub description: String,
    pub description_detail: String,
    pub category: String,
    pub tool_type: Option<String>,
    pub status: String,
    pub submitter_id: i32,
    pub tags: Vec<String>,
    pub images: Vec<String>,
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
pub struct SubmitToolDto {
    pub name: String,
    pub link: String,
    pub description: String,
    #[serde(default)]
    pub description_detail: String,
    #[serde(alias = "catagory")]
    pub category: String,
    pub tags: Vec<String>,
    /// Image references to localize: `/uploads/...`, data URLs, or http(s) URLs.
    pub images: Option<Vec<String>>,
    #[serde(alias = "type")]
    pub tool_type: Option<String>,
}

#[derive(Deserialize, IntoParams)]
pub struct ToolListParams {
    /// Comma-separated categories, any of which may match.
    pub category: Option<String>,
    /// Comma-separated tags, any of which may match.
    pub tag: Option<String>,
    /// `views`, `collections`, `loves` or `likes`; newest first otherwise.
    pub sort: Option<String>,
    pub cursor: Option<i32>,
    pub page_size: Option<u64>,
}

#[derive(Deserialize, IntoParams)]
pub struct ToolSearchParams {
    pub keyword: String,
    pub cursor: Option<i32>,
    pub page_size: Option<u64>,
}
