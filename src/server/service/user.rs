//! User service for business logic.
//!
//! Covers the caller's own account: profile edits, email and password changes, the
//! collection, submission summaries, and resubmitting a reviewed resource.

use std::{collections::HashMap, fmt::Display, future::Future, time::Duration};

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        engagement::EngagementRepository,
        resource::{ResourceRepository, StatusUpdate},
        user::UserRepository,
    },
    error::AppError,
    model::{
        resource::{ResourceKind, ResourceSummary, ReviewStatus, StatusChange},
        user::{CollectedItem, Collections, Submissions, UpdateProfileParams, User},
    },
    service::resource::{not_found, ResourceService},
    util::password::{hash_password, verify_password},
};

/// Time each submission query of [`UserService::summit`] is given before it is dropped.
pub const BRANCH_TIMEOUT: Duration = Duration::from_secs(10);

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn profile(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(user_not_found)
    }

    /// Applies a partial profile update.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated profile
    /// - `Err(AppError::BadRequest)` - Empty nickname, or one already used by someone else
    /// - `Err(AppError::NotFound)` - The account no longer exists
    pub async fn update_profile(
        &self,
        user_id: i32,
        mut params: UpdateProfileParams,
    ) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if let Some(nickname) = params.nickname.take() {
            let nickname = nickname.trim().to_string();
            if nickname.is_empty() {
                return Err(AppError::BadRequest("nickname must not be empty".to_string()));
            }
            if repo.nickname_taken(&nickname, user_id).await? {
                return Err(AppError::BadRequest("nickname already exists".to_string()));
            }
            params.nickname = Some(nickname);
        }

        repo.update_profile(user_id, params)
            .await?
            .ok_or_else(user_not_found)
    }

    /// Changes the caller's email after re-checking username and password.
    pub async fn change_email(
        &self,
        user: &User,
        name: &str,
        password: &str,
        new_email: &str,
    ) -> Result<User, AppError> {
        let new_email = new_email.trim();
        if name.trim() != user.username {
            return Err(AppError::BadRequest("username does not match".to_string()));
        }
        if new_email.is_empty() {
            return Err(AppError::BadRequest("new email is required".to_string()));
        }

        let repo = UserRepository::new(self.db);
        let account = repo
            .find_credentials_by_id(user.id)
            .await?
            .ok_or_else(user_not_found)?;
        if !verify_password(password, &account.password_hash) {
            return Err(AppError::BadRequest("incorrect password".to_string()));
        }
        if new_email != account.email && repo.email_taken(new_email).await? {
            return Err(AppError::BadRequest("email already exists".to_string()));
        }

        repo.update_email(user.id, new_email).await?;

        self.profile(user.id).await
    }

    /// Sets a new password when `name` and `email` both match the caller.
    pub async fn change_password(
        &self,
        user: &User,
        name: &str,
        email: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        if name.trim() != user.username || email.trim() != user.email {
            return Err(AppError::BadRequest(
                "username or email does not match".to_string(),
            ));
        }
        if new_password.is_empty() {
            return Err(AppError::BadRequest("new password is required".to_string()));
        }

        UserRepository::new(self.db)
            .update_password(user.id, &hash_password(new_password)?)
            .await?;

        Ok(())
    }

    /// The caller's collection grouped by kind, most recently collected first.
    ///
    /// Collection rows whose resource has since disappeared are skipped.
    pub async fn collections(&self, user_id: i32) -> Result<Collections, AppError> {
        let rows = EngagementRepository::new(self.db)
            .collections_by_user(user_id)
            .await?;

        let mut ids_by_kind: HashMap<ResourceKind, Vec<i32>> = HashMap::new();
        for row in &rows {
            if let Some(kind) = ResourceKind::from_name(&row.resource_type) {
                ids_by_kind.entry(kind).or_default().push(row.resource_id);
            }
        }

        let resource_repo = ResourceRepository::new(self.db);
        let mut summaries = HashMap::new();
        for (kind, ids) in ids_by_kind {
            summaries.insert(kind, resource_repo.find_summaries(kind, &ids).await?);
        }

        let mut collections = Collections::default();
        for row in rows {
            let Some(kind) = ResourceKind::from_name(&row.resource_type) else {
                continue;
            };
            let Some(resource) = summaries
                .get_mut(&kind)
                .and_then(|by_id| by_id.remove(&row.resource_id))
            else {
                continue;
            };
            collections.push(CollectedItem {
                resource,
                collected_at: row.created_at,
            });
        }

        Ok(collections)
    }

    /// Removes a resource from the caller's collection and returns what is left.
    pub async fn uncollect(
        &self,
        user_id: i32,
        kind: ResourceKind,
        resource_id: i32,
    ) -> Result<Collections, AppError> {
        EngagementRepository::new(self.db)
            .uncollect(kind, resource_id, user_id)
            .await?
            .ok_or_else(|| not_found(kind))?;

        self.collections(user_id).await
    }

    /// The caller's submissions still waiting for review.
    pub async fn pending_submissions(&self, user_id: i32) -> Result<Submissions, AppError> {
        let repo = ResourceRepository::new(self.db);
        let pending = Some(ReviewStatus::Pending);

        Ok(Submissions {
            tools: repo
                .submissions_by_user(ResourceKind::Tool, user_id, pending)
                .await?,
            courses: repo
                .submissions_by_user(ResourceKind::Course, user_id, pending)
                .await?,
            projects: repo
                .submissions_by_user(ResourceKind::Project, user_id, pending)
                .await?,
        })
    }

    /// All of the caller's submissions, queried concurrently per kind.
    ///
    /// Each kind runs as its own task under [`BRANCH_TIMEOUT`]. A branch that fails, panics,
    /// or times out contributes an empty list; the request only fails when every branch does.
    pub async fn summit(&self, user_id: i32) -> Result<Submissions, AppError> {
        let branch = |kind: ResourceKind| {
            let db = self.db.clone();
            async move {
                ResourceRepository::new(&db)
                    .submissions_by_user(kind, user_id, None)
                    .await
            }
        };

        let (tools, courses, projects) = tokio::join!(
            run_branch("tools", BRANCH_TIMEOUT, branch(ResourceKind::Tool)),
            run_branch("courses", BRANCH_TIMEOUT, branch(ResourceKind::Course)),
            run_branch("projects", BRANCH_TIMEOUT, branch(ResourceKind::Project)),
        );

        combine(tools, courses, projects)
    }

    /// Sends one of the caller's resources back to the review queue.
    ///
    /// # Returns
    /// - `Ok(StatusChange)` - The transition that was logged
    /// - `Err(AppError::BadRequest)` - Action other than `pending`/`resubmit`
    /// - `Err(AppError::NotFound)` - Resource missing
    /// - `Err(AppError::Forbidden)` - Caller does not own the resource
    pub async fn change_status(
        &self,
        user_id: i32,
        kind: ResourceKind,
        resource_id: i32,
        action: &str,
        reason: Option<String>,
    ) -> Result<StatusChange, AppError> {
        match action.trim().to_ascii_lowercase().as_str() {
            "pending" | "resubmit" => {}
            other => {
                return Err(AppError::BadRequest(format!(
                    "unsupported status action '{}'",
                    other
                )))
            }
        }

        let resources = ResourceService::new(self.db);
        resources.require_exists(kind, resource_id).await?;
        resources.ensure_owner(kind, resource_id, user_id).await?;

        ResourceRepository::new(self.db)
            .update_status(
                kind,
                resource_id,
                StatusUpdate {
                    status: ReviewStatus::Pending,
                    reject_reason: None,
                    audited: false,
                    operator_id: user_id,
                    log_reason: reason,
                },
            )
            .await?
            .ok_or_else(|| not_found(kind))
    }
}

fn user_not_found() -> AppError {
    AppError::NotFound("user not found".to_string())
}

/// Runs `future` as its own task, giving up after `limit`.
///
/// Errors, panics, and timeouts are logged and collapse to `None`.
async fn run_branch<T, E, F>(label: &'static str, limit: Duration, future: F) -> Option<T>
where
    F: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Display + Send + 'static,
{
    let handle = tokio::spawn(future);
    let abort = handle.abort_handle();

    match tokio::time::timeout(limit, handle).await {
        Ok(Ok(Ok(value))) => Some(value),
        Ok(Ok(Err(e))) => {
            tracing::warn!("Submission query for {} failed: {}", label, e);
            None
        }
        Ok(Err(e)) => {
            tracing::warn!("Submission query for {} did not complete: {}", label, e);
            None
        }
        Err(_) => {
            abort.abort();
            tracing::warn!("Submission query for {} timed out after {:?}", label, limit);
            None
        }
    }
}

fn combine(
    tools: Option<Vec<ResourceSummary>>,
    courses: Option<Vec<ResourceSummary>>,
    projects: Option<Vec<ResourceSummary>>,
) -> Result<Submissions, AppError> {
    if tools.is_none() && courses.is_none() && projects.is_none() {
        return Err(AppError::InternalError(
            "every submission query failed".to_string(),
        ));
    }

    Ok(Submissions {
        tools: tools.unwrap_or_default(),
        courses: courses.unwrap_or_default(),
        projects: projects.unwrap_or_default(),
    })
}
