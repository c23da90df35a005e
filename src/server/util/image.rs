//! Image storage for uploads and localized image references.
//!
//! Files land under `<root>/images/YYYY/MM/` with a name derived from a sha256 of the
//! current timestamp and the original file name. The public URL mirrors that path under
//! `/uploads`.

use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{Datelike, Utc};
use sha2::{Digest, Sha256};
use url::Url;

use crate::server::error::AppError;

pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// Public URL prefix under which the upload directory is served.
pub const PUBLIC_PREFIX: &str = "/uploads";

#[derive(Clone, Debug)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Validates and stores raw image bytes, returning the public URL.
    ///
    /// # Returns
    /// - `Ok(String)` - `/uploads/images/YYYY/MM/<hash>.<ext>`
    /// - `Err(AppError::BadRequest)` - Empty, too large, or unsupported extension
    /// - `Err(AppError::IoErr)` - Writing the file failed
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<String, AppError> {
        if bytes.is_empty() {
            return Err(AppError::BadRequest("image file is empty".to_string()));
        }
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(AppError::BadRequest("image must not exceed 5MB".to_string()));
        }
        let ext = allowed_extension(original_name).ok_or_else(|| {
            AppError::BadRequest(
                "unsupported image format, only jpg, jpeg, png, gif and webp are allowed"
                    .to_string(),
            )
        })?;

        let now = Utc::now();
        let relative = format!("images/{:04}/{:02}", now.year(), now.month());
        let dir = self.root.join(&relative);
        tokio::fs::create_dir_all(&dir).await?;

        let file_name = format!("{}.{}", hashed_stem(original_name), ext);
        tokio::fs::write(dir.join(&file_name), bytes).await?;

        Ok(format!("{}/{}/{}", PUBLIC_PREFIX, relative, file_name))
    }

    /// Turns an image reference into a local `/uploads` URL.
    ///
    /// - `/uploads/...` is returned unchanged
    /// - `data:image/<fmt>;base64,...` is decoded and stored
    /// - `http(s)://...` is downloaded and stored
    ///
    /// # Returns
    /// - `Ok(String)` - Local URL
    /// - `Err(AppError::BadRequest)` - Unsupported reference or invalid image
    /// - `Err(AppError::ReqwestErr)` - Download failed
    pub async fn localize(
        &self,
        client: &reqwest::Client,
        reference: &str,
    ) -> Result<String, AppError> {
        let reference = reference.trim();

        if reference.starts_with(&format!("{}/", PUBLIC_PREFIX)) {
            return Ok(reference.to_string());
        }
        if reference.starts_with("data:image/") {
            let (ext, bytes) = decode_data_url(reference)?;
            return self.save(&format!("base64.{}", ext), &bytes).await;
        }
        if reference.starts_with("http://") || reference.starts_with("https://") {
            return self.download(client, reference).await;
        }

        Err(AppError::BadRequest(format!(
            "unsupported image reference: {}",
            truncate(reference, 64)
        )))
    }

    /// Localizes every reference, skipping the ones that fail.
    pub async fn localize_all(&self, client: &reqwest::Client, references: &[String]) -> Vec<String> {
        let mut localized = Vec::with_capacity(references.len());

        for reference in references.iter().filter(|r| !r.trim().is_empty()) {
            match self.localize(client, reference).await {
                Ok(url) => localized.push(url),
                Err(e) => tracing::warn!(
                    "Skipping image that could not be localized ({}): {}",
                    truncate(reference, 64),
                    e
                ),
            }
        }

        localized
    }

    async fn download(&self, client: &reqwest::Client, raw_url: &str) -> Result<String, AppError> {
        let url = Url::parse(raw_url)
            .map_err(|e| AppError::BadRequest(format!("invalid image url: {}", e)))?;

        let mut response = client.get(url.clone()).send().await?.error_for_status()?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();
        if !content_type.starts_with("image/") {
            return Err(AppError::BadRequest(format!(
                "url does not point to an image (content type '{}')",
                content_type
            )));
        }
        if response
            .content_length()
            .is_some_and(|len| len as usize > MAX_IMAGE_BYTES)
        {
            return Err(AppError::BadRequest("image must not exceed 5MB".to_string()));
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            bytes.extend_from_slice(&chunk);
            if bytes.len() > MAX_IMAGE_BYTES {
                return Err(AppError::BadRequest("image must not exceed 5MB".to_string()));
            }
        }

        let ext = url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .and_then(allowed_extension)
            .unwrap_or_else(|| extension_for_mime(&content_type));

        self.save(&format!("external.{}", ext), &bytes).await
    }
}

/// Lowercased extension of `name` if it is one of the allowed image types.
fn allowed_extension(name: &str) -> Option<String> {
    let ext = Path::new(name).extension()?.to_str()?.to_ascii_lowercase();
    ALLOWED_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

fn extension_for_mime(mime: &str) -> String {
    let ext = if mime.contains("png") {
        "png"
    } else if mime.contains("gif") {
        "gif"
    } else if mime.contains("webp") {
        "webp"
    } else {
        "jpg"
    };
    ext.to_string()
}

/// First 16 hex chars of sha256(timestamp + original name).
fn hashed_stem(original_name: &str) -> String {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    let digest = Sha256::digest(format!("{}_{}", nanos, original_name).as_bytes());
    digest
        .iter()
        .take(8)
        .map(|byte| format!("{:02x}", byte))
        .collect()
}

/// Splits a `data:image/<fmt>;base64,<payload>` URL into an extension and decoded bytes.
pub fn decode_data_url(data_url: &str) -> Result<(String, Vec<u8>), AppError> {
    let invalid = || AppError::BadRequest("invalid base64 image".to_string());

    let (header, payload) = data_url.split_once(',').ok_or_else(invalid)?;
    let mime = header
        .strip_prefix("data:")
        .and_then(|h| h.strip_suffix(";base64"))
        .ok_or_else(invalid)?;
    if !mime.starts_with("image/") {
        return Err(invalid());
    }

    let bytes = STANDARD.decode(payload.trim()).map_err(|_| invalid())?;

    Ok((extension_for_mime(mime), bytes))
}

fn truncate(value: &str, max: usize) -> &str {
    match value.char_indices().nth(max) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}
