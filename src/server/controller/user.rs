//! Endpoints for the signed-in user's own account, collection, and submissions.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, EmptyDto, ErrorDto},
        user::{
            ChangeEmailDto, ChangePasswordDto, CollectionDto, StatusActionDto, StatusChangeDto,
            SubmissionsDto, UpdateProfileDto, UserDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::UpdateProfileParams,
        service::{resource::parse_kind, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Sign out.
///
/// Tokens are stateless, so this only acknowledges the request; the client discards its
/// token.
#[utoipa::path(
    post,
    path = "/users/logout",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Signed out", body = ApiResponse<EmptyDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    tracing::debug!("User {} signed out", user.id);

    Ok(Json(ApiResponse::with_message(
        "logout successful",
        EmptyDto::default(),
    )))
}

#[utoipa::path(
    get,
    path = "/users/profile",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The caller's profile", body = ApiResponse<UserDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    Ok(Json(ApiResponse::ok(user.into_dto())))
}

/// Update the caller's profile.
///
/// Absent fields keep their current value. A nickname must be non-empty and unique.
///
/// # Returns
/// - `200 OK` - Updated profile
/// - `400 Bad Request` - Empty or duplicate nickname
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/users/update",
    tag = USER_TAG,
    security(("bearer" = [])),
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated profile", body = ApiResponse<UserDto>),
        (status = 400, description = "Empty or duplicate nickname", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let updated = UserService::new(&state.db)
        .update_profile(user.id, UpdateProfileParams::from_dto(payload))
        .await?;

    Ok(Json(ApiResponse::ok(updated.into_dto())))
}

#[utoipa::path(
    get,
    path = "/users/collection",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Collected resources grouped by kind", body = ApiResponse<CollectionDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_collection(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let collections = UserService::new(&state.db).collections(user.id).await?;

    Ok(Json(ApiResponse::ok(collections.into_dto())))
}

/// Remove a resource from the caller's collection.
///
/// # Returns
/// - `200 OK` - The remaining collection
/// - `400 Bad Request` - Unknown resource type
/// - `404 Not Found` - Resource missing
#[utoipa::path(
    delete,
    path = "/users/collection/{resource_type}/{resource_id}",
    tag = USER_TAG,
    security(("bearer" = [])),
    params(
        ("resource_type" = String, Path, description = "tool, course or project"),
        ("resource_id" = i32, Path, description = "Resource ID")
    ),
    responses(
        (status = 200, description = "Remaining collection", body = ApiResponse<CollectionDto>),
        (status = 400, description = "Unknown resource type", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Resource not found", body = ErrorDto)
    ),
)]
pub async fn delete_collection(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((resource_type, resource_id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;
    let kind = parse_kind(&resource_type)?;

    let collections = UserService::new(&state.db)
        .uncollect(user.id, kind, resource_id)
        .await?;

    Ok(Json(ApiResponse::ok(collections.into_dto())))
}

/// The caller's submissions still waiting for review.
#[utoipa::path(
    get,
    path = "/users/status",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Pending submissions grouped by kind", body = ApiResponse<SubmissionsDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn get_status(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let submissions = UserService::new(&state.db)
        .pending_submissions(user.id)
        .await?;

    Ok(Json(ApiResponse::ok(submissions.into_dto())))
}

/// Every submission of the caller, grouped by kind.
///
/// The three kinds are queried concurrently; a kind whose query fails or times out is
/// returned empty. Only when all three fail does the request fail.
///
/// # Returns
/// - `200 OK` - Submissions grouped by kind
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Every query failed
#[utoipa::path(
    get,
    path = "/users/summit",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Submissions grouped by kind", body = ApiResponse<SubmissionsDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_summit(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let submissions = UserService::new(&state.db).summit(user.id).await?;

    Ok(Json(ApiResponse::ok(submissions.into_dto())))
}

/// Send one of the caller's resources back to review.
///
/// # Access Control
/// - Tool and course submitters, and project authors
///
/// # Returns
/// - `200 OK` - The logged status transition
/// - `400 Bad Request` - Unknown resource type or action
/// - `403 Forbidden` - Caller does not own the resource
/// - `404 Not Found` - Resource missing
#[utoipa::path(
    put,
    path = "/users/status/{resource_type}/{resource_id}",
    tag = USER_TAG,
    security(("bearer" = [])),
    params(
        ("resource_type" = String, Path, description = "tool, course or project"),
        ("resource_id" = i32, Path, description = "Resource ID")
    ),
    request_body = StatusActionDto,
    responses(
        (status = 200, description = "Status changed", body = ApiResponse<StatusChangeDto>),
        (status = 400, description = "Unknown resource type or action", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Resource not found", body = ErrorDto)
    ),
)]
pub async fn update_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((resource_type, resource_id)): Path<(String, i32)>,
    Json(payload): Json<StatusActionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;
    let kind = parse_kind(&resource_type)?;

    let change = UserService::new(&state.db)
        .change_status(user.id, kind, resource_id, &payload.action, payload.reason)
        .await?;

    Ok(Json(ApiResponse::ok(change.into_status_dto())))
}

#[utoipa::path(
    post,
    path = "/users/profile/email",
    tag = USER_TAG,
    security(("bearer" = [])),
    request_body = ChangeEmailDto,
    responses(
        (status = 200, description = "Email changed", body = ApiResponse<UserDto>),
        (status = 400, description = "Wrong username or password, or duplicate email", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn change_email(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ChangeEmailDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let updated = UserService::new(&state.db)
        .change_email(&user, &payload.name, &payload.password, &payload.new_email)
        .await?;

    Ok(Json(ApiResponse::with_message(
        "email updated",
        updated.into_dto(),
    )))
}

#[utoipa::path(
    post,
    path = "/users/profile/password",
    tag = USER_TAG,
    security(("bearer" = [])),
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = ApiResponse<EmptyDto>),
        (status = 400, description = "Username or email does not match", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    UserService::new(&state.db)
        .change_password(&user, &payload.name, &payload.email, &payload.new_password)
        .await?;

    Ok(Json(ApiResponse::with_message(
        "password updated",
        EmptyDto::default(),
    )))
}
