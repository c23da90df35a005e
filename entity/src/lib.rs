//! SeaORM entity models for the campus hub schema.

pub mod prelude;

pub mod collection;
pub mod comment;
pub mod comment_like;
pub mod course;
pub mod course_category;
pub mod course_resource;
pub mod course_teacher;
pub mod like;
pub mod project;
pub mod project_author;
pub mod project_image;
pub mod project_tech;
pub mod resource_status_log;
pub mod tool;
pub mod tool_contributor;
pub mod tool_image;
pub mod tool_tag;
pub mod user;
