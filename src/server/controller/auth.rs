use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ApiResponse, EmptyDto, ErrorDto},
        auth::{AuthResponseDto, ForgotPasswordDto, LoginDto, RegisterDto},
    },
    server::{
        error::AppError,
        service::auth::{AuthService, RegisterParams},
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates the account with the `user` role, a nickname equal to the username, and a
/// bcrypt-hashed password, then signs it in.
///
/// # Arguments
/// - `state` - Application state containing the database connection and JWT keys
/// - `payload` - Username, email, password, and the invite code when one is configured
///
/// # Returns
/// - `200 OK` - Token and the new user's profile
/// - `400 Bad Request` - Missing fields, wrong invite code, or duplicate username/email
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 200, description = "Account created and signed in", body = ApiResponse<AuthResponseDto>),
        (status = 400, description = "Invalid or duplicate registration data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt, state.invite_code.as_deref());

    let signed_in = service
        .register(RegisterParams {
            username: payload.username,
            email: payload.email,
            password: payload.password,
            invite_code: payload.invite_code,
        })
        .await?;

    Ok(Json(ApiResponse::with_message(
        "registration successful",
        signed_in.into_dto(),
    )))
}

/// Sign in with a username, nickname, or email.
///
/// # Returns
/// - `200 OK` - Token and profile
/// - `401 Unauthorized` - Unknown account or wrong password
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed in", body = ApiResponse<AuthResponseDto>),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt, state.invite_code.as_deref());

    let signed_in = service
        .login(&payload.username_or_email, &payload.password)
        .await?;

    Ok(Json(ApiResponse::with_message(
        "login successful",
        signed_in.into_dto(),
    )))
}

/// Reset a forgotten password.
///
/// `certify_password` must match the configured invite code when one is set.
#[utoipa::path(
    post,
    path = "/auth/forgot-password",
    tag = AUTH_TAG,
    request_body = ForgotPasswordDto,
    responses(
        (status = 200, description = "Password reset", body = ApiResponse<EmptyDto>),
        (status = 400, description = "Missing password or wrong certify password", body = ErrorDto),
        (status = 404, description = "No account with that email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt, state.invite_code.as_deref());

    service
        .forgot_password(
            &payload.email,
            &payload.new_password,
            &payload.certify_password,
        )
        .await?;

    Ok(Json(ApiResponse::with_message(
        "password reset successful",
        EmptyDto::default(),
    )))
}
