use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, CursorPageDto, ErrorDto, SubmissionReceiptDto},
        project::{
            ProjectDetailDto, ProjectListParams, ProjectSearchParams, ProjectSummaryDto,
            SubmitProjectDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            project::{ProjectFields, ProjectListFilter, ProjectWithRelations},
            resource::{split_filter, CursorPage, ListSort},
        },
        service::{project::ProjectService, upload::UploadService},
        state::AppState,
    },
};

/// Tag for grouping project endpoints in OpenAPI documentation
pub static PROJECT_TAG: &str = "project";

/// List approved projects, filtered by category and tech stack.
#[utoipa::path(
    get,
    path = "/projects/profile",
    tag = PROJECT_TAG,
    params(ProjectListParams),
    responses(
        (status = 200, description = "One page of approved projects", body = ApiResponse<CursorPageDto<ProjectSummaryDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> Result<impl IntoResponse, AppError> {
    let filter = ProjectListFilter {
        categories: split_filter(params.category.as_deref()),
        tech: split_filter(params.tech.as_deref()),
        sort: ListSort::from_param(params.sort.as_deref()),
        page: CursorPage::new(params.cursor, params.page_size),
    };

    let listing = ProjectService::new(&state.db).list(filter).await?;

    Ok(Json(ApiResponse::ok(
        listing.into_dto(ProjectWithRelations::into_summary_dto),
    )))
}

#[utoipa::path(
    get,
    path = "/projects/search",
    tag = PROJECT_TAG,
    params(ProjectSearchParams),
    responses(
        (status = 200, description = "Matching projects", body = ApiResponse<CursorPageDto<ProjectSummaryDto>>),
        (status = 400, description = "Empty keyword", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_projects(
    State(state): State<AppState>,
    Query(params): Query<ProjectSearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = CursorPage::new(params.cursor, params.page_size);

    let listing = ProjectService::new(&state.db)
        .search(&params.keyword, page)
        .await?;

    Ok(Json(ApiResponse::ok(
        listing.into_dto(ProjectWithRelations::into_summary_dto),
    )))
}

/// Get a project's detail page. A bearer token is optional.
#[utoipa::path(
    get,
    path = "/projects/{id}",
    tag = PROJECT_TAG,
    params(("id" = i32, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project detail", body = ApiResponse<ProjectDetailDto>),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_project(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &state.jwt, &headers)
        .optional()
        .await?;

    let detail = ProjectService::new(&state.db)
        .detail(id, viewer.as_ref())
        .await?;

    Ok(Json(ApiResponse::ok(
        detail.resource.into_detail_dto(detail.flags, detail.comments),
    )))
}

/// Upload a project for review.
///
/// The first image that localizes becomes the cover, and the caller is recorded as an
/// author.
///
/// # Returns
/// - `200 OK` - Pending submission receipt
/// - `400 Bad Request` - Missing name or category
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/projects/upload",
    tag = PROJECT_TAG,
    security(("bearer" = [])),
    request_body = SubmitProjectDto,
    responses(
        (status = 200, description = "Project submitted for review", body = ApiResponse<SubmissionReceiptDto<ProjectSummaryDto>>),
        (status = 400, description = "Invalid project data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_project(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SubmitProjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let images = UploadService::new(&state.images, &state.http_client)
        .localize_all(payload.images.as_deref())
        .await;
    let fields = ProjectFields::from_dto(payload, images);

    let project = ProjectService::new(&state.db).upload(fields, user.id).await?;

    Ok(Json(ApiResponse::with_message(
        "project submitted for review",
        project.into_receipt_dto(),
    )))
}

/// Edit a project and send it back to review.
///
/// # Access Control
/// - Any of the project's authors
#[utoipa::path(
    put,
    path = "/projects/{id}",
    tag = PROJECT_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Project ID")),
    request_body = SubmitProjectDto,
    responses(
        (status = 200, description = "Project updated and pending review", body = ApiResponse<SubmissionReceiptDto<ProjectSummaryDto>>),
        (status = 400, description = "Invalid project data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not an author", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto)
    ),
)]
pub async fn update_project(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<SubmitProjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let images = UploadService::new(&state.images, &state.http_client)
        .localize_all(payload.images.as_deref())
        .await;
    let fields = ProjectFields::from_dto(payload, images);

    let project = ProjectService::new(&state.db)
        .update(id, fields, user.id)
        .await?;

    Ok(Json(ApiResponse::with_message(
        "project updated",
        project.into_receipt_dto(),
    )))
}
