use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables with `with_table()` (or one of the grouped helpers), then call
/// `build()` to create the in-memory database.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Tool, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Tool)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys should be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tool table and its tag, image, and contributor tables.
    pub fn with_tool_tables(self) -> Self {
        self.with_table(Tool)
            .with_table(ToolTag)
            .with_table(ToolImage)
            .with_table(ToolContributor)
    }

    /// Adds the course table and its teacher, category, and resource tables.
    pub fn with_course_tables(self) -> Self {
        self.with_table(Course)
            .with_table(CourseTeacher)
            .with_table(CourseCategory)
            .with_table(CourseResource)
    }

    /// Adds the project table and its tech stack, image, and author tables.
    pub fn with_project_tables(self) -> Self {
        self.with_table(Project)
            .with_table(ProjectTech)
            .with_table(ProjectImage)
            .with_table(ProjectAuthor)
    }

    /// Adds every table the application uses.
    ///
    /// Covers users, the three resource kinds with their join tables, comments and comment
    /// likes, likes, collections, and the status log. Most service-level tests want this.
    pub fn with_resource_tables(self) -> Self {
        self.with_table(User)
            .with_tool_tables()
            .with_course_tables()
            .with_project_tables()
            .with_table(Comment)
            .with_table(CommentLike)
            .with_table(Like)
            .with_table(Collection)
            .with_table(ResourceStatusLog)
    }

    /// Builds the test context, creating every configured table.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
