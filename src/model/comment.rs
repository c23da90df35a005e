use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A reply under a top-level comment.
#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct ReplyDto {
    pub id: i32,
    pub user_id: i32,
    pub nickname: String,
    pub avatar: Option<String>,
    pub content: String,
    pub love_count: i32,
    pub is_reply: bool,
    /// Id of the top-level comment this reply belongs to.
    pub reply_to: i32,
    pub created_at: DateTime<Utc>,
}

/// A top-level comment with its direct replies.
#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct CommentDto {
    pub id: i32,
    pub user_id: i32,
    pub nickname: String,
    pub avatar: Option<String>,
    pub content: String,
    pub love_count: i32,
    pub reply_total: i32,
    pub is_reply: bool,
    pub created_at: DateTime<Utc>,
    pub replies: Vec<ReplyDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CommentPageDto {
    pub items: Vec<CommentDto>,
    /// Number of visible top-level comments on the resource.
    pub total: u64,
    pub next_cursor: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateCommentDto {
    pub content: String,
}

#[derive(Deserialize, IntoParams)]
pub struct CommentListParams {
    /// Id of the last top-level comment already seen.
    pub cursor: Option<i32>,
    /// Defaults to 20, capped at 100.
    pub limit: Option<u64>,
}
