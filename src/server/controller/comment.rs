//! Comment endpoints shared by tools, courses, and projects.
//!
//! Mounted under each kind's `/{id}/comments` with the kind supplied as an `Extension`.

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        api::{ApiResponse, EmptyDto, ErrorDto},
        comment::{CommentDto, CommentListParams, CommentPageDto, CreateCommentDto, ReplyDto},
        engagement::LikeStateDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{comment::CommentThread, resource::ResourceKind},
        service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// List comments on a resource.
///
/// Top-level comments come oldest first, each with its live replies. Pass the returned
/// `next_cursor` as `cursor` to fetch the following page.
///
/// # Returns
/// - `200 OK` - One page of threads and the total number of top-level comments
/// - `404 Not Found` - Resource missing, or unpublished and the caller is not its owner or
///   an admin
#[utoipa::path(
    get,
    path = "/{resource_type}/{id}/comments",
    tag = COMMENT_TAG,
    params(
        ("resource_type" = String, Path, description = "tools, course or projects"),
        ("id" = i32, Path, description = "Resource ID"),
        CommentListParams
    ),
    responses(
        (status = 200, description = "One page of comments", body = ApiResponse<CommentPageDto>),
        (status = 404, description = "Resource not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_comments(
    State(state): State<AppState>,
    Extension(kind): Extension<ResourceKind>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Query(params): Query<CommentListParams>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &state.jwt, &headers)
        .optional()
        .await?;

    let page = CommentService::new(&state.db)
        .list(kind, id, params.cursor, params.limit, viewer.as_ref())
        .await?;

    Ok(Json(ApiResponse::ok(page.into_dto())))
}

#[utoipa::path(
    post,
    path = "/{resource_type}/{id}/comments",
    tag = COMMENT_TAG,
    security(("bearer" = [])),
    params(
        ("resource_type" = String, Path, description = "tools, course or projects"),
        ("id" = i32, Path, description = "Resource ID")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 200, description = "Comment posted", body = ApiResponse<CommentDto>),
        (status = 400, description = "Empty content", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Resource not found", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    Extension(kind): Extension<ResourceKind>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let comment = CommentService::new(&state.db)
        .create(kind, id, &user, &payload.content)
        .await?;
    let thread = CommentThread {
        comment,
        replies: Vec::new(),
    };

    Ok(Json(ApiResponse::ok(thread.into_dto())))
}

/// Delete one of the caller's top-level comments.
#[utoipa::path(
    delete,
    path = "/{resource_type}/{id}/comments/{comment_id}",
    tag = COMMENT_TAG,
    security(("bearer" = [])),
    params(
        ("resource_type" = String, Path, description = "tools, course or projects"),
        ("id" = i32, Path, description = "Resource ID"),
        ("comment_id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Comment deleted", body = ApiResponse<EmptyDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    Extension(kind): Extension<ResourceKind>,
    headers: HeaderMap,
    Path((id, comment_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    CommentService::new(&state.db)
        .delete(kind, id, user.id, Some(comment_id))
        .await?;

    Ok(Json(ApiResponse::with_message(
        "comment deleted",
        EmptyDto::default(),
    )))
}

/// Delete the caller's most recent top-level comment on the resource.
#[utoipa::path(
    delete,
    path = "/{resource_type}/{id}/comments",
    tag = COMMENT_TAG,
    security(("bearer" = [])),
    params(
        ("resource_type" = String, Path, description = "tools, course or projects"),
        ("id" = i32, Path, description = "Resource ID")
    ),
    responses(
        (status = 200, description = "Comment deleted", body = ApiResponse<EmptyDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto)
    ),
)]
pub async fn delete_latest_comment(
    State(state): State<AppState>,
    Extension(kind): Extension<ResourceKind>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    CommentService::new(&state.db)
        .delete(kind, id, user.id, None)
        .await?;

    Ok(Json(ApiResponse::with_message(
        "comment deleted",
        EmptyDto::default(),
    )))
}

/// Reply to a top-level comment.
///
/// Replies nest one level only, so the target must itself be a live top-level comment on
/// this resource.
///
/// # Returns
/// - `200 OK` - The reply
/// - `400 Bad Request` - Empty content
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Parent comment missing, deleted, or itself a reply
#[utoipa::path(
    post,
    path = "/{resource_type}/{id}/comments/{comment_id}/reply",
    tag = COMMENT_TAG,
    security(("bearer" = [])),
    params(
        ("resource_type" = String, Path, description = "tools, course or projects"),
        ("id" = i32, Path, description = "Resource ID"),
        ("comment_id" = i32, Path, description = "Parent comment ID")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 200, description = "Reply posted", body = ApiResponse<ReplyDto>),
        (status = 400, description = "Empty content", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto)
    ),
)]
pub async fn reply_comment(
    State(state): State<AppState>,
    Extension(kind): Extension<ResourceKind>,
    headers: HeaderMap,
    Path((id, comment_id)): Path<(i32, i32)>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let reply = CommentService::new(&state.db)
        .reply(kind, id, comment_id, &user, &payload.content)
        .await?;

    Ok(Json(ApiResponse::ok(reply.into_reply_dto())))
}

#[utoipa::path(
    delete,
    path = "/{resource_type}/{id}/comments/{comment_id}/reply",
    tag = COMMENT_TAG,
    security(("bearer" = [])),
    params(
        ("resource_type" = String, Path, description = "tools, course or projects"),
        ("id" = i32, Path, description = "Resource ID"),
        ("comment_id" = i32, Path, description = "Reply ID")
    ),
    responses(
        (status = 200, description = "Reply deleted", body = ApiResponse<EmptyDto>),
        (status = 400, description = "Target is not a reply", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto)
    ),
)]
pub async fn delete_reply(
    State(state): State<AppState>,
    Extension(kind): Extension<ResourceKind>,
    headers: HeaderMap,
    Path((id, comment_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    CommentService::new(&state.db)
        .delete_reply(kind, id, comment_id, user.id)
        .await?;

    Ok(Json(ApiResponse::with_message(
        "reply deleted",
        EmptyDto::default(),
    )))
}

/// Toggle the caller's like on a comment.
#[utoipa::path(
    post,
    path = "/{resource_type}/{id}/comments/{comment_id}/like",
    tag = COMMENT_TAG,
    security(("bearer" = [])),
    params(
        ("resource_type" = String, Path, description = "tools, course or projects"),
        ("id" = i32, Path, description = "Resource ID"),
        ("comment_id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "New like state", body = ApiResponse<LikeStateDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto)
    ),
)]
pub async fn like_comment(
    State(state): State<AppState>,
    Extension(kind): Extension<ResourceKind>,
    headers: HeaderMap,
    Path((id, comment_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let outcome = CommentService::new(&state.db)
        .toggle_like(kind, id, comment_id, &user)
        .await?;

    Ok(Json(ApiResponse::ok(outcome.into_like_dto())))
}
