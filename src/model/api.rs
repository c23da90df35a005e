use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error envelope returned for every failed request.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// HTTP status code, repeated in the body.
    pub code: u16,
    pub message: String,
}

impl ErrorDto {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Success envelope wrapping every response payload.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self::with_message("success", data)
    }

    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            message: message.into(),
            data,
        }
    }
}

/// Payload for operations that only acknowledge success.
#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct EmptyDto {}

/// A page of a cursor-paginated listing.
///
/// `next_cursor` is the id to pass as `cursor` for the following page, absent once the
/// listing is exhausted.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CursorPageDto<T> {
    pub items: Vec<T>,
    pub next_cursor: Option<i32>,
}

/// Acknowledgement returned when a tool, course, or project is submitted or edited.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SubmissionReceiptDto<T> {
    pub resource_id: i32,
    pub resource_type: String,
    pub resource: T,
    pub audit_status: String,
    pub submit_time: chrono::DateTime<chrono::Utc>,
    pub audit_time: Option<chrono::DateTime<chrono::Utc>>,
    pub reject_reason: Option<String>,
}
