use crate::server::{
    error::AppError,
    model::{resource::ResourceKind, user::User},
    service::comment::CommentService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod visibility;
