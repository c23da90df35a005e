use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub nickname: String,
    pub avatar: Option<String>,
    pub description: Option<String>,
    pub face_photo: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Display identity of another user, as shown next to comments and contributions.
#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct UserBriefDto {
    pub id: i32,
    pub nickname: String,
    pub avatar: Option<String>,
}

/// Partial profile update; absent fields are left unchanged.
#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct UpdateProfileDto {
    pub nickname: Option<String>,
    pub avatar: Option<String>,
    pub description: Option<String>,
    pub face_photo: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ChangeEmailDto {
    /// Must equal the caller's username.
    pub name: String,
    pub password: String,
    pub new_email: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ChangePasswordDto {
    /// Must equal the caller's username.
    pub name: String,
    /// Must equal the caller's email.
    pub email: String,
    #[serde(alias = "new_passward")]
    pub new_password: String,
}

/// A collected or submitted resource in summary form.
#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct ResourceSummaryDto {
    pub resource_id: i32,
    pub resource_type: String,
    pub name: String,
    pub cover: Option<String>,
    pub status: String,
    pub views: i32,
    pub loves: i32,
    pub collections: i32,
    pub reject_reason: Option<String>,
    pub submit_time: DateTime<Utc>,
    pub audit_time: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CollectedItemDto {
    #[serde(flatten)]
    pub resource: ResourceSummaryDto,
    pub collected_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct CollectionDto {
    pub tools: Vec<CollectedItemDto>,
    pub courses: Vec<CollectedItemDto>,
    pub projects: Vec<CollectedItemDto>,
}

/// The caller's submissions grouped by resource kind.
#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct SubmissionsDto {
    pub tools: Vec<ResourceSummaryDto>,
    pub courses: Vec<ResourceSummaryDto>,
    pub projects: Vec<ResourceSummaryDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct StatusActionDto {
    /// Only `pending` (alias `resubmit`) is accepted.
    pub action: String,
    pub reason: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct StatusChangeDto {
    pub resource_id: i32,
    pub resource_type: String,
    pub old_status: String,
    pub new_status: String,
    pub operate_time: DateTime<Utc>,
}
