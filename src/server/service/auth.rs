//! Registration, login, and password reset.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, SignedInUser, User, ROLE_USER},
    util::{
        jwt::JwtKeys,
        password::{hash_password, verify_password},
    },
};

/// Input to [`AuthService::register`].
pub struct RegisterParams {
    pub username: String,
    pub email: String,
    pub password: String,
    pub invite_code: Option<String>,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtKeys,
    invite_code: Option<&'a str>,
}

impl<'a> AuthService<'a> {
    /// # Arguments
    /// - `invite_code` - Configured `INVITE_CODE`; registration and password reset are open
    ///   when `None`
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtKeys, invite_code: Option<&'a str>) -> Self {
        Self {
            db,
            jwt,
            invite_code,
        }
    }

    /// Creates an account and signs it in.
    ///
    /// The nickname starts out equal to the username and the role is always `user`.
    ///
    /// # Returns
    /// - `Ok(SignedInUser)` - The new user and a bearer token
    /// - `Err(AppError::BadRequest)` - Empty fields, wrong invite code, or a username,
    ///   email, or nickname that is already registered
    pub async fn register(&self, params: RegisterParams) -> Result<SignedInUser, AppError> {
        let username = params.username.trim().to_string();
        let email = params.email.trim().to_string();

        if username.is_empty() || email.is_empty() || params.password.is_empty() {
            return Err(AppError::BadRequest(
                "username, email and password are required".to_string(),
            ));
        }
        self.check_invite_code(params.invite_code.as_deref())?;

        let repo = UserRepository::new(self.db);
        if repo.username_taken(&username).await? {
            return Err(AppError::BadRequest("username already exists".to_string()));
        }
        if repo.email_taken(&email).await? {
            return Err(AppError::BadRequest("email already exists".to_string()));
        }
        // Login falls back to nickname lookup, so a username may not shadow another
        // account's nickname.
        if repo.nickname_taken(&username, 0).await? {
            return Err(AppError::BadRequest("nickname already exists".to_string()));
        }

        let user = repo
            .create(CreateUserParams {
                nickname: username.clone(),
                username,
                email,
                password_hash: hash_password(&params.password)?,
                role: ROLE_USER.to_string(),
            })
            .await?;

        tracing::info!("Registered user {} ({})", user.id, user.username);

        self.sign_in(user)
    }

    /// Verifies credentials and issues a token.
    ///
    /// An identifier containing `@` is treated as an email. Anything else is tried as a
    /// username first and then as a nickname.
    ///
    /// # Returns
    /// - `Ok(SignedInUser)` - Credentials are valid
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown account or wrong password
    pub async fn login(&self, identifier: &str, password: &str) -> Result<SignedInUser, AppError> {
        let identifier = identifier.trim();
        let repo = UserRepository::new(self.db);

        let account = if identifier.contains('@') {
            repo.find_credentials_by_email(identifier).await?
        } else {
            match repo.find_credentials_by_username(identifier).await? {
                Some(account) => Some(account),
                None => repo.find_credentials_by_nickname(identifier).await?,
            }
        };

        let Some(account) = account else {
            return Err(AuthError::InvalidCredentials.into());
        };
        if !verify_password(password, &account.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        self.sign_in(User::from_entity(account))
    }

    /// Replaces the password of the account registered under `email`.
    ///
    /// # Returns
    /// - `Ok(())` - Password updated
    /// - `Err(AppError::BadRequest)` - Empty password or wrong certify password
    /// - `Err(AppError::NotFound)` - No account with that email
    pub async fn forgot_password(
        &self,
        email: &str,
        new_password: &str,
        certify_password: &str,
    ) -> Result<(), AppError> {
        if new_password.is_empty() {
            return Err(AppError::BadRequest("new password is required".to_string()));
        }
        self.check_invite_code(Some(certify_password))?;

        let repo = UserRepository::new(self.db);
        let account = repo
            .find_credentials_by_email(email.trim())
            .await?
            .ok_or_else(|| AppError::NotFound("user not found".to_string()))?;

        repo.update_password(account.id, &hash_password(new_password)?)
            .await?;

        Ok(())
    }

    fn check_invite_code(&self, presented: Option<&str>) -> Result<(), AppError> {
        match self.invite_code {
            Some(expected) if presented.map(str::trim) != Some(expected) => {
                Err(AppError::BadRequest("invalid invite code".to_string()))
            }
            _ => Ok(()),
        }
    }

    fn sign_in(&self, user: User) -> Result<SignedInUser, AppError> {
        let token = self.jwt.issue(user.id, &user.username, &user.role)?;
        Ok(SignedInUser { token, user })
    }
}
