//! Campus Hub Test Utils
//!
//! Shared testing utilities for the campus hub backend. Tests get an in-memory SQLite
//! database whose tables are generated straight from the entity models, plus factories
//! that insert users, resources, and comments with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: fluent builder for choosing which tables a test needs
//! - **TestContext**: holds the database connection once built
//! - **TestError**: errors that can occur during setup
//! - **factory**: builders and `create_*` shorthands for test rows
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use test_utils::factory::{create_tool, create_user};
//!
//! #[tokio::test]
//! async fn likes_a_tool() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new()
//!         .with_resource_tables()
//!         .build()
//!         .await
//!         .unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let user = create_user(db).await?;
//!     let tool = create_tool(db, user.id).await?;
//!     // ...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
