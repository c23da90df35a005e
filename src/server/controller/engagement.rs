//! Like, collect, and view endpoints shared by tools, courses, and projects.
//!
//! The router mounts these handlers once per resource kind and supplies the kind as an
//! `Extension`. The documented `{resource_type}` segment is `tools`, `course`, or
//! `projects`; projects use `/collected` instead of `/collections`, and courses and
//! projects use `/view` instead of `/views`.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        engagement::{CollectStateDto, LikeStateDto, ViewsDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{engagement::views_dto, resource::ResourceKind},
        service::engagement::EngagementService,
        state::AppState,
    },
};

/// Tag for grouping engagement endpoints in OpenAPI documentation
pub static ENGAGEMENT_TAG: &str = "engagement";

/// Like a resource. Liking twice counts once.
#[utoipa::path(
    post,
    path = "/{resource_type}/{id}/like",
    tag = ENGAGEMENT_TAG,
    security(("bearer" = [])),
    params(
        ("resource_type" = String, Path, description = "tools, course or projects"),
        ("id" = i32, Path, description = "Resource ID")
    ),
    responses(
        (status = 200, description = "Liked", body = ApiResponse<LikeStateDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Resource not found", body = ErrorDto)
    ),
)]
pub async fn like(
    State(state): State<AppState>,
    Extension(kind): Extension<ResourceKind>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let outcome = EngagementService::new(&state.db)
        .like(kind, id, &user)
        .await?;

    Ok(Json(ApiResponse::ok(outcome.into_like_dto())))
}

/// Remove a like. Unliking something not liked is a no-op.
#[utoipa::path(
    delete,
    path = "/{resource_type}/{id}/like",
    tag = ENGAGEMENT_TAG,
    security(("bearer" = [])),
    params(
        ("resource_type" = String, Path, description = "tools, course or projects"),
        ("id" = i32, Path, description = "Resource ID")
    ),
    responses(
        (status = 200, description = "Like removed", body = ApiResponse<LikeStateDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Resource not found", body = ErrorDto)
    ),
)]
pub async fn unlike(
    State(state): State<AppState>,
    Extension(kind): Extension<ResourceKind>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let outcome = EngagementService::new(&state.db)
        .unlike(kind, id, &user)
        .await?;

    Ok(Json(ApiResponse::ok(outcome.into_like_dto())))
}

#[utoipa::path(
    post,
    path = "/{resource_type}/{id}/collections",
    tag = ENGAGEMENT_TAG,
    security(("bearer" = [])),
    params(
        ("resource_type" = String, Path, description = "tools, course or projects"),
        ("id" = i32, Path, description = "Resource ID")
    ),
    responses(
        (status = 200, description = "Collected", body = ApiResponse<CollectStateDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Resource not found", body = ErrorDto)
    ),
)]
pub async fn collect(
    State(state): State<AppState>,
    Extension(kind): Extension<ResourceKind>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let outcome = EngagementService::new(&state.db)
        .collect(kind, id, &user)
        .await?;

    Ok(Json(ApiResponse::ok(outcome.into_collect_dto())))
}

#[utoipa::path(
    delete,
    path = "/{resource_type}/{id}/collections",
    tag = ENGAGEMENT_TAG,
    security(("bearer" = [])),
    params(
        ("resource_type" = String, Path, description = "tools, course or projects"),
        ("id" = i32, Path, description = "Resource ID")
    ),
    responses(
        (status = 200, description = "Removed from collection", body = ApiResponse<CollectStateDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Resource not found", body = ErrorDto)
    ),
)]
pub async fn uncollect(
    State(state): State<AppState>,
    Extension(kind): Extension<ResourceKind>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let outcome = EngagementService::new(&state.db)
        .uncollect(kind, id, &user)
        .await?;

    Ok(Json(ApiResponse::ok(outcome.into_collect_dto())))
}

/// Count a view. No authentication required; a token lets owners count views of their
/// own unpublished submissions.
#[utoipa::path(
    post,
    path = "/{resource_type}/{id}/views",
    tag = ENGAGEMENT_TAG,
    params(
        ("resource_type" = String, Path, description = "tools, course or projects"),
        ("id" = i32, Path, description = "Resource ID")
    ),
    responses(
        (status = 200, description = "View counted", body = ApiResponse<ViewsDto>),
        (status = 404, description = "Resource missing or hidden", body = ErrorDto)
    ),
)]
pub async fn view(
    State(state): State<AppState>,
    Extension(kind): Extension<ResourceKind>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &state.jwt, &headers)
        .optional()
        .await?;

    let views = EngagementService::new(&state.db)
        .view(kind, id, viewer.as_ref())
        .await?;

    Ok(Json(ApiResponse::ok(views_dto(views))))
}
