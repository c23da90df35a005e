use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    util::jwt::JwtKeys,
};

pub enum Permission {
    Admin,
}

/// Resolves the caller from the `Authorization: Bearer <token>` header.
///
/// Controllers construct a guard per request and call `require` for protected routes or
/// `optional` for routes that only personalize their response.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtKeys,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtKeys, headers: &'a HeaderMap) -> Self {
        Self { db, jwt, headers }
    }

    /// Requires a valid token for an existing user holding every listed permission.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::MissingToken | InvalidToken | UserNotInDatabase)` - 401
    /// - `Err(AuthError::AccessDenied)` - 403
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(token) = bearer_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let user = self.resolve(token).await?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "User attempted an admin action without the admin role".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// Resolves the caller if a usable token is present.
    ///
    /// A missing, malformed, or expired token means an anonymous caller rather than an
    /// error. Database failures still propagate.
    pub async fn optional(&self) -> Result<Option<User>, AppError> {
        let Some(token) = bearer_token(self.headers) else {
            return Ok(None);
        };

        match self.resolve(token).await {
            Ok(user) => Ok(Some(user)),
            Err(AppError::AuthErr(e)) => {
                tracing::debug!("Ignoring unusable token on optional auth: {}", e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn resolve(&self, token: &str) -> Result<User, AppError> {
        let claims = self.jwt.verify(token)?;
        let user_id = claims
            .user_id()
            .map_err(|_| AuthError::InvalidToken(format!("bad subject {:?}", claims.sub)))?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(user)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim();
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}
