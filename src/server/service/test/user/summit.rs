use super::*;

/// Tests the submission summary across kinds and statuses.
///
/// Expected: every submission of the caller regardless of status, none of another user's
#[tokio::test]
async fn lists_all_submissions_by_kind() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = User::from_entity(factory::create_user(db).await?);
    let other = factory::create_user(db).await?;
    factory::tool::ToolFactory::new(db, user.id)
        .status("pending")
        .build()
        .await?;
    factory::create_tool(db, user.id).await?;
    factory::create_course(db, user.id).await?;
    factory::create_project(db, other.id).await?;

    let submissions = UserService::new(db).summit(user.id).await?;

    assert_eq!(submissions.tools.len(), 2);
    assert_eq!(submissions.courses.len(), 1);
    assert!(submissions.projects.is_empty());

    Ok(())
}

/// Tests the pending-only submission view.
///
/// Expected: only the pending tool
#[tokio::test]
async fn pending_submissions_exclude_reviewed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let pending = factory::tool::ToolFactory::new(db, user.id)
        .status("pending")
        .build()
        .await?;
    factory::create_tool(db, user.id).await?;

    let submissions = UserService::new(db).pending_submissions(user.id).await?;

    assert_eq!(submissions.tools.len(), 1);
    assert_eq!(submissions.tools[0].id, pending.id);
    assert!(submissions.courses.is_empty());

    Ok(())
}
