use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterDto {
    pub username: String,
    pub email: String,
    pub password: String,
    pub invite_code: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    /// Username, nickname, or email (anything containing `@`).
    #[serde(alias = "username")]
    pub username_or_email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ForgotPasswordDto {
    pub email: String,
    pub new_password: String,
    /// Must match the configured invite code when one is set.
    pub certify_password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AuthResponseDto {
    pub token: String,
    pub user: UserDto,
}
