use crate::server::{
    error::{auth::AuthError, AppError},
    service::auth::{AuthService, RegisterParams},
    util::jwt::JwtKeys,
};
use test_utils::{builder::TestBuilder, factory};

mod login;
mod register;

const SECRET: &str = "service-test-secret";

fn register_params(username: &str, email: &str, password: &str) -> RegisterParams {
    RegisterParams {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        invite_code: None,
    }
}
