use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, UpdateProfileParams, ROLE_USER},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_many;
mod nickname_taken;
mod update_profile;
