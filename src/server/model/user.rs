//! User domain model.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        auth::AuthResponseDto,
        user::{CollectedItemDto, CollectionDto, SubmissionsDto, UserBriefDto, UserDto},
    },
    server::model::resource::{ResourceKind, ResourceSummary},
};

pub const ROLE_USER: &str = "user";
pub const ROLE_ADMIN: &str = "admin";

/// An authenticated or looked-up user, without credentials.
#[derive(Debug, Clone)]
pub struct User {
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

impl User {
    /// Converts an entity model at the repository boundary, dropping the password hash.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            nickname: entity.nickname,
            avatar: entity.avatar,
            description: entity.description,
            face_photo: entity.face_photo,
            role: entity.role,
            created_at: entity.created_at,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            nickname: self.nickname,
            avatar: self.avatar,
            description: self.description,
            face_photo: self.face_photo,
            role: self.role,
            created_at: self.created_at,
        }
    }
}

/// Name shown for a user: the nickname, or the username when the nickname is blank.
pub fn display_name(user: &entity::user::Model) -> String {
    if user.nickname.trim().is_empty() {
        user.username.clone()
    } else {
        user.nickname.clone()
    }
}

pub fn brief_dto(user: &entity::user::Model) -> UserBriefDto {
    UserBriefDto {
        id: user.id,
        nickname: display_name(user),
        avatar: user.avatar.clone(),
    }
}

/// Fields accepted by a partial profile update.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParams {
    pub nickname: Option<String>,
    pub avatar: Option<String>,
    pub description: Option<String>,
    pub face_photo: Option<String>,
}

impl UpdateProfileParams {
    pub fn from_dto(dto: crate::model::user::UpdateProfileDto) -> Self {
        Self {
            nickname: dto.nickname,
            avatar: dto.avatar,
            description: dto.description,
            face_photo: dto.face_photo,
        }
    }
}

/// Fields needed to insert a new account.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub nickname: String,
    pub role: String,
}

/// A user together with a freshly issued bearer token.
#[derive(Debug, Clone)]
pub struct SignedInUser {
    pub token: String,
    pub user: User,
}

impl SignedInUser {
    pub fn into_dto(self) -> AuthResponseDto {
        AuthResponseDto {
            token: self.token,
            user: self.user.into_dto(),
        }
    }
}

/// A user's submissions grouped by kind.
#[derive(Debug, Clone, Default)]
pub struct Submissions {
    pub tools: Vec<ResourceSummary>,
    pub courses: Vec<ResourceSummary>,
    pub projects: Vec<ResourceSummary>,
}

impl Submissions {
    pub fn into_dto(self) -> SubmissionsDto {
        SubmissionsDto {
            tools: self.tools.into_iter().map(ResourceSummary::into_dto).collect(),
            courses: self.courses.into_iter().map(ResourceSummary::into_dto).collect(),
            projects: self.projects.into_iter().map(ResourceSummary::into_dto).collect(),
        }
    }
}

/// One collected resource and when it was collected.
#[derive(Debug, Clone)]
pub struct CollectedItem {
    pub resource: ResourceSummary,
    pub collected_at: DateTime<Utc>,
}

/// A user's collection grouped by kind, most recent first within each kind.
#[derive(Debug, Clone, Default)]
pub struct Collections {
    pub tools: Vec<CollectedItem>,
    pub courses: Vec<CollectedItem>,
    pub projects: Vec<CollectedItem>,
}

impl Collections {
    pub fn push(&mut self, item: CollectedItem) {
        match item.resource.kind {
            ResourceKind::Tool => self.tools.push(item),
            ResourceKind::Course => self.courses.push(item),
            ResourceKind::Project => self.projects.push(item),
        }
    }

    pub fn into_dto(self) -> CollectionDto {
        fn convert(items: Vec<CollectedItem>) -> Vec<CollectedItemDto> {
            items
                .into_iter()
                .map(|item| CollectedItemDto {
                    resource: item.resource.into_dto(),
                    collected_at: item.collected_at,
                })
                .collect()
        }

        CollectionDto {
            tools: convert(self.tools),
            courses: convert(self.courses),
            projects: convert(self.projects),
        }
    }
}
