use super::*;

/// Tests grouping the caller's collection by kind.
///
/// Expected: one tool and one project, each with its collected_at
#[tokio::test]
async fn groups_collection_by_kind() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let tool = factory::create_tool(db, user.id).await?;
    let project = factory::create_project(db, user.id).await?;
    let engagement = EngagementRepository::new(db);
    engagement.collect(ResourceKind::Tool, tool.id, user.id).await?;
    engagement
        .collect(ResourceKind::Project, project.id, user.id)
        .await?;

    let collections = UserService::new(db).collections(user.id).await?;

    assert_eq!(collections.tools.len(), 1);
    assert_eq!(collections.tools[0].resource.id, tool.id);
    assert_eq!(collections.tools[0].resource.counters.collections, 1);
    assert!(collections.courses.is_empty());
    assert_eq!(collections.projects.len(), 1);
    assert_eq!(collections.projects[0].resource.id, project.id);

    Ok(())
}

/// Tests removing an item from the collection.
///
/// Expected: the remaining collection no longer lists the tool; missing resource → NotFound
#[tokio::test]
async fn uncollect_returns_remaining_collection() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let tool = factory::create_tool(db, user.id).await?;
    EngagementRepository::new(db)
        .collect(ResourceKind::Tool, tool.id, user.id)
        .await?;
    let service = UserService::new(db);

    let remaining = service
        .uncollect(user.id, ResourceKind::Tool, tool.id)
        .await?;
    assert!(remaining.tools.is_empty());

    let missing = service
        .uncollect(user.id, ResourceKind::Tool, tool.id + 100)
        .await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}
