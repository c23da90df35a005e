use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, IntoParams)]
pub struct PendingParams {
    /// tool(s), course(s), project(s) or comment(s); all resource kinds when absent.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Zero-based page index.
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PendingItemDto {
    pub resource_id: i32,
    pub resource_type: String,
    pub name: String,
    pub submitter_id: i32,
    pub status: String,
    pub submit_time: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PendingPageDto {
    pub items: Vec<PendingItemDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Review decision, accepted as a JSON body or as a query string.
#[derive(Serialize, Deserialize, ToSchema, IntoParams)]
pub struct ReviewDto {
    /// `approve`/`approved` or `reject`/`rejected`.
    pub action: String,
    /// Defaults to `tool`.
    ///
    /// Camel-cased on the wire because the review form and its query string send
    /// `resourceType`; `resource_type` is accepted too.
    #[serde(default, rename = "resourceType", alias = "resource_type")]
    pub resource_type: Option<String>,
    pub reject_reason: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ReviewResultDto {
    pub resource_id: i32,
    pub resource_type: String,
    pub old_status: String,
    pub status: String,
    pub audit_time: DateTime<Utc>,
    pub reject_reason: Option<String>,
}
