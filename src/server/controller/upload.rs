use axum::{
    extract::{Multipart, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        upload::{ImageUploadForm, ProcessImageDto, UploadedImageDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::upload::UploadService,
        state::AppState,
    },
};

/// Tag for grouping upload endpoints in OpenAPI documentation
pub static UPLOAD_TAG: &str = "upload";

/// Multipart field carrying the file.
const IMAGE_FIELD: &str = "image";

/// Upload an image file.
///
/// The file is stored under a content-derived name, so uploading the same bytes twice
/// yields the same URL.
///
/// # Returns
/// - `200 OK` - Public `/uploads/...` URL of the stored file
/// - `400 Bad Request` - No `image` field or a malformed form
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/upload/image",
    tag = UPLOAD_TAG,
    security(("bearer" = [])),
    request_body(content = ImageUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image stored", body = ApiResponse<UploadedImageDto>),
        (status = 400, description = "Missing image field", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        if bytes.is_empty() {
            return Err(AppError::BadRequest("image is empty".to_string()));
        }

        let url = UploadService::new(&state.images, &state.http_client)
            .store(&file_name, &bytes)
            .await?;

        return Ok(Json(ApiResponse::ok(UploadedImageDto { url })));
    }

    Err(AppError::BadRequest("image is required".to_string()))
}

/// Localize an image reference.
///
/// Accepts a remote `http(s)` URL, a `data:image/...;base64,` URL, or an existing
/// `/uploads` path, and returns the local URL.
#[utoipa::path(
    post,
    path = "/api/upload/process",
    tag = UPLOAD_TAG,
    security(("bearer" = [])),
    request_body = ProcessImageDto,
    responses(
        (status = 200, description = "Image localized", body = ApiResponse<UploadedImageDto>),
        (status = 400, description = "Unsupported or empty reference", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Download or storage failure", body = ErrorDto)
    ),
)]
pub async fn process_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ProcessImageDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let url = UploadService::new(&state.images, &state.http_client)
        .process(&payload.url)
        .await?;

    Ok(Json(ApiResponse::ok(UploadedImageDto { url })))
}
