use crate::model::engagement::{CollectStateDto, LikeStateDto, ViewsDto};

/// Whether the viewing user has liked or collected a resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngagementFlags {
    pub isliked: bool,
    pub iscollected: bool,
}

/// Outcome of a like or collect toggle.
///
/// `changed` is false when the call was a no-op (already liked, not collected, ...), in
/// which case `count` is the untouched current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub active: bool,
    pub changed: bool,
    pub count: i32,
}

impl ToggleOutcome {
    pub fn into_like_dto(self) -> LikeStateDto {
        LikeStateDto {
            isliked: self.active,
            likes: self.count,
        }
    }

    pub fn into_collect_dto(self) -> CollectStateDto {
        CollectStateDto {
            iscollected: self.active,
            collections: self.count,
        }
    }
}

pub fn views_dto(views: i32) -> ViewsDto {
    ViewsDto { views }
}
