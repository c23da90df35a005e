use crate::server::{
    error::AppError,
    model::resource::ResourceKind,
    service::admin::{AdminService, ReviewParams, MAX_ENTRIES},
};
use chrono::{Duration, Utc};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod pending;
mod review;
