use super::*;

/// Tests unliking a resource that was never liked.
///
/// Expected: unchanged outcome with loves still 0
#[tokio::test]
async fn unlike_without_like_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, tool) = factory::helpers::create_tool_with_submitter(db).await?;
    let repo = EngagementRepository::new(db);

    let outcome = repo.unlike(ResourceKind::Tool, tool.id, user.id).await?.unwrap();

    assert!(!outcome.active);
    assert!(!outcome.changed);
    assert_eq!(outcome.count, 0);

    Ok(())
}

/// Tests that unlike removes the row and decrements the counter.
///
/// Expected: loves back to 0 and no like rows
#[tokio::test]
async fn unlike_after_like_restores_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let submitter = factory::create_user(db).await?;
    let course = factory::create_course(db, submitter.id).await?;
    let user = factory::create_user(db).await?;
    let repo = EngagementRepository::new(db);

    repo.like(ResourceKind::Course, course.id, user.id).await?;
    let outcome = repo
        .unlike(ResourceKind::Course, course.id, user.id)
        .await?
        .unwrap();

    assert!(outcome.changed);
    assert_eq!(outcome.count, 0);
    assert_eq!(like_rows(db, ResourceKind::Course, course.id).await?, 0);

    Ok(())
}
