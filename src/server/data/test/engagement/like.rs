use super::*;

/// Tests liking a resource twice.
///
/// Verifies that the second like is a no-op: the count stays at one and only one like
/// row exists.
///
/// Expected: first call changed, second call unchanged, loves == 1
#[tokio::test]
async fn liking_twice_counts_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, tool) = factory::helpers::create_tool_with_submitter(db).await?;
    let repo = EngagementRepository::new(db);

    let first = repo.like(ResourceKind::Tool, tool.id, user.id).await?.unwrap();
    let second = repo.like(ResourceKind::Tool, tool.id, user.id).await?.unwrap();

    assert!(first.active && first.changed);
    assert_eq!(first.count, 1);
    assert!(second.active && !second.changed);
    assert_eq!(second.count, 1);
    assert_eq!(like_rows(db, ResourceKind::Tool, tool.id).await?, 1);

    Ok(())
}

/// Tests that the like counter equals the number of like rows after several users like.
///
/// Expected: loves == number of distinct likers
#[tokio::test]
async fn counter_matches_rows_for_many_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let submitter = factory::create_user(db).await?;
    let project = factory::create_project(db, submitter.id).await?;
    let repo = EngagementRepository::new(db);

    for _ in 0..3 {
        let user = factory::create_user(db).await?;
        repo.like(ResourceKind::Project, project.id, user.id).await?;
        repo.like(ResourceKind::Project, project.id, user.id).await?;
    }

    let counters = ResourceRepository::new(db)
        .counters(ResourceKind::Project, project.id)
        .await?
        .unwrap();
    assert_eq!(counters.loves, 3);
    assert_eq!(like_rows(db, ResourceKind::Project, project.id).await?, 3);

    Ok(())
}

/// Tests liking a resource that does not exist.
///
/// Expected: Ok(None) and no like row
#[tokio::test]
async fn returns_none_for_missing_resource() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = EngagementRepository::new(db);

    let result = repo.like(ResourceKind::Course, 404, user.id).await?;

    assert!(result.is_none());
    assert_eq!(like_rows(db, ResourceKind::Course, 404).await?, 0);

    Ok(())
}
