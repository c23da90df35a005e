use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_JWT_SECRET: &str = "your-secret-key";
const DEFAULT_UPLOAD_DIR: &str = "uploads";

pub struct Config {
    pub database_url: String,
    pub port: u16,

    pub jwt_secret: String,
    /// When set, registration and password reset must present this code.
    pub invite_code: Option<String>,

    pub upload_dir: PathBuf,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// `dotenvy::dotenv()` should run first so a local `.env` file is picked up.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - `DATABASE_URL` missing or `PORT` not a valid port
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let port = match std::env::var("PORT") {
            Ok(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value,
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET is not set, falling back to the built-in development secret");
            DEFAULT_JWT_SECRET.to_string()
        });

        let invite_code = std::env::var("INVITE_CODE")
            .ok()
            .filter(|code| !code.trim().is_empty());

        let upload_dir = std::env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_UPLOAD_DIR));

        Ok(Self {
            database_url,
            port,
            jwt_secret,
            invite_code,
            upload_dir,
        })
    }
}
