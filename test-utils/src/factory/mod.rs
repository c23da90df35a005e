//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` shorthand that
//! inserts a row with defaults.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let tool = factory::tool::ToolFactory::new(&db, user.id)
//!     .name("Ripgrep")
//!     .status("pending")
//!     .build()
//!     .await?;
//! let comment = factory::create_comment(&db, "tool", tool.id, user.id).await?;
//! ```
//!
//! Resource factories default to `approved` status so rows show up in public listings
//! unless a test asks otherwise.

pub mod comment;
pub mod course;
pub mod helpers;
pub mod project;
pub mod tool;
pub mod user;

pub use comment::{create_comment, create_reply};
pub use course::create_course;
pub use project::create_project;
pub use tool::create_tool;
pub use user::{create_admin, create_user};
