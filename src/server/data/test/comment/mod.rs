use crate::server::{
    data::comment::{CommentRepository, ReplyDeletion},
    model::resource::ResourceKind,
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory, factory::comment::CommentFactory};

mod delete_reply;
mod list;
mod reply;
mod toggle_like;
