//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into every handler through Axum's
//! state extraction. Every field is cheap to clone.

use sea_orm::DatabaseConnection;

use crate::server::util::{image::ImageStore, jwt::JwtKeys};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// HTTP client used to download remote images.
    ///
    /// Configured without redirects and with a request timeout.
    pub http_client: reqwest::Client,

    /// Keys for issuing and verifying bearer tokens.
    pub jwt: JwtKeys,

    /// Storage for uploaded and localized images.
    pub images: ImageStore,

    /// Registration and password-reset code, when configured.
    pub invite_code: Option<String>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        jwt: JwtKeys,
        images: ImageStore,
        invite_code: Option<String>,
    ) -> Self {
        Self {
            db,
            http_client,
            jwt,
            images,
            invite_code,
        }
    }
}
