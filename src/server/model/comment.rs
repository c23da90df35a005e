//! Comment thread models.
//!
//! Comments nest exactly one level: a top-level comment carries its direct replies and a
//! reply never has replies of its own.

use chrono::{DateTime, Utc};

use crate::model::comment::{CommentDto, CommentPageDto, ReplyDto};

pub const DEFAULT_COMMENT_LIMIT: u64 = 20;
pub const MAX_COMMENT_LIMIT: u64 = 100;

/// A live comment joined with its author's display identity.
#[derive(Debug, Clone)]
pub struct CommentEntry {
    pub id: i32,
    pub parent_id: Option<i32>,
    pub user_id: i32,
    pub nickname: String,
    pub avatar: Option<String>,
    pub content: String,
    pub love_count: i32,
    pub reply_total: i32,
    pub created_at: DateTime<Utc>,
}

impl CommentEntry {
    /// Builds an entry from a comment row and its author, if the author still exists.
    pub fn from_entity(
        comment: entity::comment::Model,
        author: Option<&entity::user::Model>,
    ) -> Self {
        let (nickname, avatar) = match author {
            Some(user) => (super::user::display_name(user), user.avatar.clone()),
            None => (String::new(), None),
        };

        Self {
            id: comment.id,
            parent_id: comment.parent_id,
            user_id: comment.user_id,
            nickname,
            avatar,
            content: comment.content,
            love_count: comment.love_count,
            reply_total: comment.reply_total,
            created_at: comment.created_at,
        }
    }

    pub fn into_reply_dto(self) -> ReplyDto {
        ReplyDto {
            id: self.id,
            user_id: self.user_id,
            nickname: self.nickname,
            avatar: self.avatar,
            content: self.content,
            love_count: self.love_count,
            is_reply: true,
            reply_to: self.parent_id.unwrap_or_default(),
            created_at: self.created_at,
        }
    }
}

/// A top-level comment and its ordered replies.
#[derive(Debug, Clone)]
pub struct CommentThread {
    pub comment: CommentEntry,
    pub replies: Vec<CommentEntry>,
}

impl CommentThread {
    pub fn into_dto(self) -> CommentDto {
        let c = self.comment;
        CommentDto {
            id: c.id,
            user_id: c.user_id,
            nickname: c.nickname,
            avatar: c.avatar,
            content: c.content,
            love_count: c.love_count,
            reply_total: c.reply_total,
            is_reply: false,
            created_at: c.created_at,
            replies: self
                .replies
                .into_iter()
                .map(CommentEntry::into_reply_dto)
                .collect(),
        }
    }
}

/// One page of top-level threads.
#[derive(Debug, Clone)]
pub struct CommentPage {
    pub threads: Vec<CommentThread>,
    pub total: u64,
    pub next_cursor: Option<i32>,
}

impl CommentPage {
    pub fn into_dto(self) -> CommentPageDto {
        CommentPageDto {
            items: self.threads.into_iter().map(CommentThread::into_dto).collect(),
            total: self.total,
            next_cursor: self.next_cursor,
        }
    }
}

/// Clamps a requested page size to `1..=MAX_COMMENT_LIMIT`, defaulting when absent.
pub fn comment_limit(limit: Option<u64>) -> u64 {
    limit
        .filter(|l| *l > 0)
        .unwrap_or(DEFAULT_COMMENT_LIMIT)
        .min(MAX_COMMENT_LIMIT)
}
