pub use super::collection::Entity as Collection;
pub use super::comment::Entity as Comment;
pub use super::comment_like::Entity as CommentLike;
pub use super::course::Entity as Course;
pub use super::course_category::Entity as CourseCategory;
pub use super::course_resource::Entity as CourseResource;
pub use super::course_teacher::Entity as CourseTeacher;
pub use super::like::Entity as Like;
pub use super::project::Entity as Project;
pub use super::project_author::Entity as ProjectAuthor;
pub use super::project_image::Entity as ProjectImage;
pub use super::project_tech::Entity as ProjectTech;
pub use super::resource_status_log::Entity as ResourceStatusLog;
pub use super::tool::Entity as Tool;
pub use super::tool_contributor::Entity as ToolContributor;
pub use super::tool_image::Entity as ToolImage;
pub use super::tool_tag::Entity as ToolTag;
pub use super::user::Entity as User;
