//! Shared helper utilities for factory methods.
//!
//! Provides unique id generation and helpers that create a resource together with the
//! rows it depends on.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a submitter and an approved tool owned by them.
///
/// # Returns
/// - `Ok((user, tool))` - The submitter and the tool
/// - `Err(DbErr)` - Database error during creation
pub async fn create_tool_with_submitter(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::tool::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let tool = crate::factory::tool::create_tool(db, user.id).await?;

    Ok((user, tool))
}

/// Attaches tags to a tool.
pub async fn add_tool_tags(db: &DatabaseConnection, tool_id: i32, tags: &[&str]) -> Result<(), DbErr> {
    for tag in tags {
        entity::tool_tag::ActiveModel {
            id: ActiveValue::NotSet,
            tool_id: ActiveValue::Set(tool_id),
            tag: ActiveValue::Set(tag.to_string()),
        }
        .insert(db)
        .await?;
    }

    Ok(())
}

/// Attaches categories to a course.
pub async fn add_course_categories(
    db: &DatabaseConnection,
    course_id: i32,
    categories: &[&str],
) -> Result<(), DbErr> {
    for category in categories {
        entity::course_category::ActiveModel {
            id: ActiveValue::NotSet,
            course_id: ActiveValue::Set(course_id),
            category: ActiveValue::Set(category.to_string()),
        }
        .insert(db)
        .await?;
    }

    Ok(())
}

/// Adds a user to a project's author list.
pub async fn add_project_author(
    db: &DatabaseConnection,
    project_id: i32,
    user_id: i32,
) -> Result<entity::project_author::Model, DbErr> {
    entity::project_author::ActiveModel {
        id: ActiveValue::NotSet,
        project_id: ActiveValue::Set(project_id),
        user_id: ActiveValue::Set(user_id),
    }
    .insert(db)
    .await
}
