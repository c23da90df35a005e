use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct LikeStateDto {
    pub isliked: bool,
    pub likes: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct CollectStateDto {
    pub iscollected: bool,
    pub collections: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct ViewsDto {
    pub views: i32,
}
