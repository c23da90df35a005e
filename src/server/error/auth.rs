use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header on a request that needs one.
    #[error("Missing bearer token")]
    MissingToken,

    /// The bearer token failed signature or expiry validation.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    /// The token was valid but its subject no longer exists.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// The user is authenticated but lacks the role or ownership required.
    ///
    /// # Fields
    /// - User id
    /// - Description of what was attempted, for server-side logging
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Login with an unknown account or a wrong password.
    #[error("Invalid login credentials")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `UserNotInDatabase` → 401 Unauthorized
/// - `InvalidCredentials` → 401 Unauthorized with a login-specific message
/// - `AccessDenied` → 403 Forbidden
///
/// Details are logged at debug level, the client only sees a generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            Self::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid username or password")
            }
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Forbidden"),
        };

        (status, Json(ErrorDto::new(status, message))).into_response()
    }
}
