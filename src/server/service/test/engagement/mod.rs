use crate::server::{
    error::AppError,
    model::{resource::ResourceKind, user::User},
    service::engagement::EngagementService,
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod visibility;
