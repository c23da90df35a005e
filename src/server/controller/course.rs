use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, CursorPageDto, ErrorDto, SubmissionReceiptDto},
        course::{
            AddCourseResourceDto, CourseDetailDto, CourseListParams, CourseResourceDto,
            CourseSearchParams, CourseSummaryDto, DownloadDto, SubmitCourseDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            course::{resource_dto, CourseFields, CourseListFilter, CourseWithRelations},
            resource::{split_filter, CursorPage, ListSort},
        },
        service::{
            course::{AddResourceParams, CourseService},
            upload::UploadService,
        },
        state::AppState,
    },
};

/// Tag for grouping course endpoints in OpenAPI documentation
pub static COURSE_TAG: &str = "course";

/// List approved courses.
///
/// `semester` must match exactly; `category` is comma-separated and matches any of the
/// course's categories.
#[utoipa::path(
    get,
    path = "/course",
    tag = COURSE_TAG,
    params(CourseListParams),
    responses(
        (status = 200, description = "One page of approved courses", body = ApiResponse<CursorPageDto<CourseSummaryDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_courses(
    State(state): State<AppState>,
    Query(params): Query<CourseListParams>,
) -> Result<impl IntoResponse, AppError> {
    let filter = CourseListFilter {
        semester: params
            .semester
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
        categories: split_filter(params.category.as_deref()),
        sort: ListSort::from_param(params.sort.as_deref()),
        page: CursorPage::new(params.cursor, params.page_size),
    };

    let listing = CourseService::new(&state.db).list(filter).await?;

    Ok(Json(ApiResponse::ok(
        listing.into_dto(CourseWithRelations::into_summary_dto),
    )))
}

#[utoipa::path(
    get,
    path = "/course/search",
    tag = COURSE_TAG,
    params(CourseSearchParams),
    responses(
        (status = 200, description = "Matching courses", body = ApiResponse<CursorPageDto<CourseSummaryDto>>),
        (status = 400, description = "Empty keyword", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_courses(
    State(state): State<AppState>,
    Query(params): Query<CourseSearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = CursorPage::new(params.cursor, params.page_size);

    let listing = CourseService::new(&state.db)
        .search(
            &params.keyword,
            split_filter(params.category.as_deref()),
            page,
        )
        .await?;

    Ok(Json(ApiResponse::ok(
        listing.into_dto(CourseWithRelations::into_summary_dto),
    )))
}

/// Get a course's detail page.
///
/// Resources are split into links and uploaded files. Contributors are the submitter
/// followed by everyone who attached a resource. A bearer token is optional.
///
/// # Returns
/// - `200 OK` - Course detail
/// - `404 Not Found` - Course missing or hidden
#[utoipa::path(
    get,
    path = "/course/{id}",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course detail", body = ApiResponse<CourseDetailDto>),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &state.jwt, &headers)
        .optional()
        .await?;

    let detail = CourseService::new(&state.db)
        .detail(id, viewer.as_ref())
        .await?;

    Ok(Json(ApiResponse::ok(
        detail.resource.into_detail_dto(detail.flags, detail.comments),
    )))
}

/// Submit a course for review.
///
/// # Returns
/// - `200 OK` - Pending submission receipt
/// - `400 Bad Request` - Missing name or semester, or a negative credit
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/course/submit",
    tag = COURSE_TAG,
    security(("bearer" = [])),
    request_body = SubmitCourseDto,
    responses(
        (status = 200, description = "Course submitted for review", body = ApiResponse<SubmissionReceiptDto<CourseSummaryDto>>),
        (status = 400, description = "Invalid course data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_course(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SubmitCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let cover = UploadService::new(&state.images, &state.http_client)
        .localize_optional(payload.cover.as_deref())
        .await;
    let fields = CourseFields::from_dto(payload, cover);

    let course = CourseService::new(&state.db).submit(fields, user.id).await?;

    Ok(Json(ApiResponse::with_message(
        "course submitted for review",
        course.into_receipt_dto(),
    )))
}

#[utoipa::path(
    get,
    path = "/course/{id}/resources",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Resources in the order they were added", body = ApiResponse<Vec<CourseResourceDto>>),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course_resources(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &state.jwt, &headers)
        .optional()
        .await?;

    let resources = CourseService::new(&state.db)
        .resources(id, viewer.as_ref())
        .await?;

    let resources: Vec<CourseResourceDto> = resources.into_iter().map(resource_dto).collect();

    Ok(Json(ApiResponse::ok(resources)))
}

/// Attach a link or an uploaded file to a course.
///
/// Exactly one of `url` and `file` must be given. Resources are visible immediately and
/// are not reviewed.
///
/// # Returns
/// - `200 OK` - The stored resource
/// - `400 Bad Request` - Missing title, or not exactly one of url/file
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Course missing
#[utoipa::path(
    post,
    path = "/course/{id}/resources",
    tag = COURSE_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Course ID")),
    request_body = AddCourseResourceDto,
    responses(
        (status = 200, description = "Resource added", body = ApiResponse<CourseResourceDto>),
        (status = 400, description = "Invalid resource data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto)
    ),
)]
pub async fn add_course_resource(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<AddCourseResourceDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let resource = CourseService::new(&state.db)
        .add_resource(
            id,
            &user,
            AddResourceParams {
                title: payload.title,
                description: payload.description,
                url: payload.url,
                file: payload.file,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(resource_dto(resource))))
}

#[utoipa::path(
    get,
    path = "/course/{id}/textbooks/{textbook_id}/download",
    tag = COURSE_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Course ID"),
        ("textbook_id" = i32, Path, description = "ID of an uploaded course resource")
    ),
    responses(
        (status = 200, description = "Download URL", body = ApiResponse<DownloadDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Textbook not found", body = ErrorDto)
    ),
)]
pub async fn download_textbook(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, textbook_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let url = CourseService::new(&state.db)
        .download(id, textbook_id, &user)
        .await?;

    Ok(Json(ApiResponse::ok(DownloadDto { url })))
}
