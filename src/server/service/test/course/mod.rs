use crate::server::{
    error::AppError,
    model::user::User,
    service::course::{AddResourceParams, CourseService},
};
use test_utils::{builder::TestBuilder, factory};

mod resources;
