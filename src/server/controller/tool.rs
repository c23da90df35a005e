use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, CursorPageDto, ErrorDto, SubmissionReceiptDto},
        tool::{SubmitToolDto, ToolDetailDto, ToolListParams, ToolSearchParams, ToolSummaryDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            resource::{split_filter, CursorPage, ListSort},
            tool::{ToolFields, ToolListFilter, ToolWithRelations},
        },
        service::{tool::ToolService, upload::UploadService},
        state::AppState,
    },
};

/// Tag for grouping tool endpoints in OpenAPI documentation
pub static TOOL_TAG: &str = "tool";

/// List approved tools.
///
/// Categories and tags are comma-separated; a tool matches when it has any of the listed
/// categories and any of the listed tags.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Filters, sort key, cursor, and page size
///
/// # Returns
/// - `200 OK` - One page of tools and the cursor for the next one
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/tools/profile",
    tag = TOOL_TAG,
    params(ToolListParams),
    responses(
        (status = 200, description = "One page of approved tools", body = ApiResponse<CursorPageDto<ToolSummaryDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_tools(
    State(state): State<AppState>,
    Query(params): Query<ToolListParams>,
) -> Result<impl IntoResponse, AppError> {
    let filter = ToolListFilter {
        categories: split_filter(params.category.as_deref()),
        tags: split_filter(params.tag.as_deref()),
        sort: ListSort::from_param(params.sort.as_deref()),
        page: CursorPage::new(params.cursor, params.page_size),
    };

    let listing = ToolService::new(&state.db).list(filter).await?;

    Ok(Json(ApiResponse::ok(
        listing.into_dto(ToolWithRelations::into_summary_dto),
    )))
}

/// Search approved tools by name or description.
#[utoipa::path(
    get,
    path = "/tools/search",
    tag = TOOL_TAG,
    params(ToolSearchParams),
    responses(
        (status = 200, description = "Matching tools", body = ApiResponse<CursorPageDto<ToolSummaryDto>>),
        (status = 400, description = "Empty keyword", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_tools(
    State(state): State<AppState>,
    Query(params): Query<ToolSearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = CursorPage::new(params.cursor, params.page_size);

    let listing = ToolService::new(&state.db)
        .search(&params.keyword, page)
        .await?;

    Ok(Json(ApiResponse::ok(
        listing.into_dto(ToolWithRelations::into_summary_dto),
    )))
}

/// Get a tool's detail page.
///
/// A bearer token is optional; when present, `isliked` and `iscollected` reflect the
/// caller. Tools that are not approved are only shown to their submitter and to admins.
///
/// # Returns
/// - `200 OK` - Tool with images, tags, contributors, flags, and the first comments
/// - `401 Unauthorized` - A token was sent but its user no longer exists
/// - `404 Not Found` - Tool missing or hidden
#[utoipa::path(
    get,
    path = "/tools/{id}",
    tag = TOOL_TAG,
    params(("id" = i32, Path, description = "Tool ID")),
    responses(
        (status = 200, description = "Tool detail", body = ApiResponse<ToolDetailDto>),
        (status = 404, description = "Tool not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tool(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &state.jwt, &headers)
        .optional()
        .await?;

    let detail = ToolService::new(&state.db)
        .detail(id, viewer.as_ref())
        .await?;

    Ok(Json(ApiResponse::ok(
        detail.resource.into_detail_dto(detail.flags, detail.comments),
    )))
}

/// Submit a tool for review.
///
/// Images are copied into the upload directory first; references that cannot be
/// localized are dropped.
///
/// # Returns
/// - `200 OK` - Pending submission receipt
/// - `400 Bad Request` - Missing required fields or tags
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/tools/submit",
    tag = TOOL_TAG,
    security(("bearer" = [])),
    request_body = SubmitToolDto,
    responses(
        (status = 200, description = "Tool submitted for review", body = ApiResponse<SubmissionReceiptDto<ToolSummaryDto>>),
        (status = 400, description = "Invalid tool data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_tool(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SubmitToolDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let images = UploadService::new(&state.images, &state.http_client)
        .localize_all(payload.images.as_deref())
        .await;
    let fields = ToolFields::from_dto(payload, images);

    let tool = ToolService::new(&state.db).submit(fields, user.id).await?;

    Ok(Json(ApiResponse::with_message(
        "tool submitted for review",
        tool.into_receipt_dto(),
    )))
}

/// Edit a tool and send it back to review.
///
/// # Access Control
/// - The tool's submitter
#[utoipa::path(
    put,
    path = "/tools/{id}",
    tag = TOOL_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Tool ID")),
    request_body = SubmitToolDto,
    responses(
        (status = 200, description = "Tool updated and pending review", body = ApiResponse<SubmissionReceiptDto<ToolSummaryDto>>),
        (status = 400, description = "Invalid tool data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the submitter", body = ErrorDto),
        (status = 404, description = "Tool not found", body = ErrorDto)
    ),
)]
pub async fn update_tool(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<SubmitToolDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let images = UploadService::new(&state.images, &state.http_client)
        .localize_all(payload.images.as_deref())
        .await;
    let fields = ToolFields::from_dto(payload, images);

    let tool = ToolService::new(&state.db)
        .update(id, fields, user.id)
        .await?;

    Ok(Json(ApiResponse::with_message(
        "tool updated",
        tool.into_receipt_dto(),
    )))
}
