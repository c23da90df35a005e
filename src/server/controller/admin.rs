use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        admin::{PendingPageDto, PendingParams, ReviewDto, ReviewResultDto},
        api::{ApiResponse, ErrorDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::admin::{AdminService, ReviewParams},
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// List submissions awaiting review, oldest first.
///
/// Without `type` the tool, course, and project queues are merged by submit time.
///
/// # Access Control
/// - `Admin` - Only administrators can read the review queue
///
/// # Returns
/// - `200 OK` - One page of pending submissions with paging totals
/// - `400 Bad Request` - Unknown resource type
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an administrator
#[utoipa::path(
    get,
    path = "/admin/pending",
    tag = ADMIN_TAG,
    security(("bearer" = [])),
    params(PendingParams),
    responses(
        (status = 200, description = "Pending submissions", body = ApiResponse<PendingPageDto>),
        (status = 400, description = "Unknown resource type", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pending(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PendingParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let page = AdminService::new(&state.db)
        .pending(params.kind.as_deref(), params.page, params.entries)
        .await?;

    Ok(Json(ApiResponse::ok(page.into_dto())))
}

/// Approve or reject a submission.
///
/// The reject reason is stored only when rejecting. Every decision is appended to the
/// status log.
#[utoipa::path(
    post,
    path = "/admin/review/{item_id}",
    tag = ADMIN_TAG,
    security(("bearer" = [])),
    params(("item_id" = i32, Path, description = "Resource ID")),
    request_body = ReviewDto,
    responses(
        (status = 200, description = "Review applied", body = ApiResponse<ReviewResultDto>),
        (status = 400, description = "Unknown action or resource type", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Resource not found", body = ErrorDto)
    ),
)]
pub async fn review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(item_id): Path<i32>,
    Json(payload): Json<ReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    apply_review(state, headers, item_id, payload).await
}

/// Query-string form of [`review`] for clients that send the decision as parameters.
#[utoipa::path(
    get,
    path = "/admin/review/{item_id}",
    tag = ADMIN_TAG,
    security(("bearer" = [])),
    params(("item_id" = i32, Path, description = "Resource ID"), ReviewDto),
    responses(
        (status = 200, description = "Review applied", body = ApiResponse<ReviewResultDto>),
        (status = 400, description = "Unknown action or resource type", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Resource not found", body = ErrorDto)
    ),
)]
pub async fn review_by_query(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(item_id): Path<i32>,
    Query(params): Query<ReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    apply_review(state, headers, item_id, params).await
}

async fn apply_review(
    state: AppState,
    headers: HeaderMap,
    item_id: i32,
    review: ReviewDto,
) -> Result<Json<ApiResponse<ReviewResultDto>>, AppError> {
    let admin = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let change = AdminService::new(&state.db)
        .review(ReviewParams {
            item_id,
            action: review.action,
            resource_type: review.resource_type,
            reject_reason: review.reject_reason,
            operator_id: admin.id,
        })
        .await?;

    Ok(Json(ApiResponse::with_message(
        "review applied",
        change.into_review_dto(),
    )))
}
