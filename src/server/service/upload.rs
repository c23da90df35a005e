//! Image upload and localization.

use crate::server::{error::AppError, util::image::ImageStore};

pub struct UploadService<'a> {
    images: &'a ImageStore,
    http_client: &'a reqwest::Client,
}

impl<'a> UploadService<'a> {
    pub fn new(images: &'a ImageStore, http_client: &'a reqwest::Client) -> Self {
        Self {
            images,
            http_client,
        }
    }

    /// Stores an uploaded file and returns its `/uploads` URL.
    pub async fn store(&self, file_name: &str, bytes: &[u8]) -> Result<String, AppError> {
        let url = self.images.save(file_name, bytes).await?;
        tracing::debug!("Stored upload {} as {}", file_name, url);
        Ok(url)
    }

    /// Turns one image reference into a local URL, failing on anything unusable.
    pub async fn process(&self, reference: &str) -> Result<String, AppError> {
        if reference.trim().is_empty() {
            return Err(AppError::BadRequest("url is required".to_string()));
        }
        self.images.localize(self.http_client, reference).await
    }

    /// Localizes the images attached to a submission. References that fail are dropped.
    pub async fn localize_all(&self, references: Option<&[String]>) -> Vec<String> {
        match references {
            Some(references) => self.images.localize_all(self.http_client, references).await,
            None => Vec::new(),
        }
    }

    /// Localizes an optional single image, such as a course cover.
    pub async fn localize_optional(&self, reference: Option<&str>) -> Option<String> {
        let reference = reference.map(str::trim).filter(|r| !r.is_empty())?;
        match self.images.localize(self.http_client, reference).await {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!("Dropping image that could not be localized: {}", e);
                None
            }
        }
    }
}
