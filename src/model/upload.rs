use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ProcessImageDto {
    pub url: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UploadedImageDto {
    /// Public path under `/uploads`.
    pub url: String,
}

/// Multipart form for `POST /api/upload/image`; documentation only.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ImageUploadForm {
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}
