use crate::server::{
    data::engagement::EngagementRepository,
    error::AppError,
    model::{resource::ResourceKind, user::User},
    service::user::UserService,
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod change_status;
mod collections;
mod summit;
