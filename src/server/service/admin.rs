//! Moderation: the review queue and review decisions.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::resource::{ResourceRepository, StatusUpdate},
    error::AppError,
    model::{
        admin::PendingPage,
        resource::{ResourceKind, ReviewStatus, StatusChange},
    },
    service::resource::{not_found, parse_kind},
};

pub const DEFAULT_ENTRIES: u64 = 10;
pub const MAX_ENTRIES: u64 = 100;

/// Input to [`AdminService::review`].
pub struct ReviewParams {
    pub item_id: i32,
    pub action: String,
    /// Defaults to `tool`.
    pub resource_type: Option<String>,
    pub reject_reason: Option<String>,
    pub operator_id: i32,
}

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// One page of pending submissions, oldest first.
    ///
    /// With no `kind` the queues of all three resource kinds are merged by submit time.
    /// Comments are not moderated, so asking for them yields an empty page.
    ///
    /// # Arguments
    /// - `kind` - `tool(s)`, `course(s)`, `project(s)`, `comment(s)`, or `None` for all
    /// - `page` - Zero-based page index
    /// - `per_page` - Page size, clamped to `1..=100`
    pub async fn pending(
        &self,
        kind: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<PendingPage, AppError> {
        let per_page = match per_page {
            0 => DEFAULT_ENTRIES,
            n => n.min(MAX_ENTRIES),
        };
        let repo = ResourceRepository::new(self.db);

        match kind.map(str::trim).filter(|k| !k.is_empty()) {
            Some(k) if matches!(k.to_ascii_lowercase().as_str(), "comment" | "comments") => {
                Ok(PendingPage::empty(page, per_page))
            }
            Some(k) => {
                let kind = parse_kind(k)?;
                let (items, total) = repo.pending_page(kind, page, per_page).await?;
                Ok(PendingPage::new(items, total, page, per_page))
            }
            None => {
                let mut total = 0;
                for kind in ResourceKind::ALL {
                    total += repo.pending_count(kind).await?;
                }
                let skip = page.saturating_mul(per_page);
                if skip >= total {
                    return Ok(PendingPage::new(Vec::new(), total, page, per_page));
                }

                // Every item on the requested merged page is among the first
                // (page + 1) * per_page items of its own queue. `skip < total` bounds
                // the window by the queue size.
                let window = skip + per_page;
                let mut merged = Vec::new();
                for kind in ResourceKind::ALL {
                    let (items, _) = repo.pending_page(kind, 0, window).await?;
                    merged.extend(items);
                }
                merged.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

                let items = merged
                    .into_iter()
                    .skip(skip as usize)
                    .take(per_page as usize)
                    .collect();

                Ok(PendingPage::new(items, total, page, per_page))
            }
        }
    }

    /// Approves or rejects a submission and logs the transition.
    ///
    /// # Returns
    /// - `Ok(StatusChange)` - The applied transition
    /// - `Err(AppError::BadRequest)` - Unknown action or resource type
    /// - `Err(AppError::NotFound)` - No such resource
    pub async fn review(&self, params: ReviewParams) -> Result<StatusChange, AppError> {
        let status = match params.action.trim().to_ascii_lowercase().as_str() {
            "approve" | "approved" => ReviewStatus::Approved,
            "reject" | "rejected" => ReviewStatus::Rejected,
            other => {
                return Err(AppError::BadRequest(format!(
                    "unsupported review action '{}'",
                    other
                )))
            }
        };
        let kind = match params.resource_type.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() => parse_kind(value)?,
            _ => ResourceKind::Tool,
        };

        let reject_reason = match status {
            ReviewStatus::Rejected => params
                .reject_reason
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty()),
            _ => None,
        };

        let change = ResourceRepository::new(self.db)
            .update_status(
                kind,
                params.item_id,
                StatusUpdate {
                    status,
                    reject_reason: reject_reason.clone(),
                    audited: true,
                    operator_id: params.operator_id,
                    log_reason: reject_reason,
                },
            )
            .await?
            .ok_or_else(|| not_found(kind))?;

        tracing::info!(
            "Admin {} set {} {} from {} to {}",
            params.operator_id,
            kind,
            params.item_id,
            change.old_status,
            change.new_status
        );

        Ok(change)
    }
}
