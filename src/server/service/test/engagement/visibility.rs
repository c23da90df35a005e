use super::*;

/// Tests that views and likes on a pending project are refused for outsiders.
///
/// Expected: NotFound for an anonymous view and a stranger's like, counters unchanged
#[tokio::test]
async fn pending_project_refuses_outsiders() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = User::from_entity(factory::create_user(db).await?);
    let stranger = User::from_entity(factory::create_user(db).await?);
    let project = factory::project::ProjectFactory::new(db, owner.id)
        .status("pending")
        .build()
        .await?;
    let service = EngagementService::new(db);

    let viewed = service.view(ResourceKind::Project, project.id, None).await;
    assert!(matches!(viewed, Err(AppError::NotFound(_))));

    let liked = service.like(ResourceKind::Project, project.id, &stranger).await;
    assert!(matches!(liked, Err(AppError::NotFound(_))));

    let collected = service
        .collect(ResourceKind::Project, project.id, &stranger)
        .await;
    assert!(matches!(collected, Err(AppError::NotFound(_))));

    let stored = entity::prelude::Project::find_by_id(project.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.views, 0);
    assert_eq!(stored.loves, 0);
    assert_eq!(stored.collections, 0);

    Ok(())
}

/// Tests that owners and admins can still interact with a pending resource.
///
/// Expected: the owner's view counts and an admin's like counts
#[tokio::test]
async fn pending_project_open_to_owner_and_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = User::from_entity(factory::create_user(db).await?);
    let admin = User::from_entity(factory::create_admin(db).await?);
    let project = factory::project::ProjectFactory::new(db, owner.id)
        .status("pending")
        .build()
        .await?;
    let service = EngagementService::new(db);

    let views = service
        .view(ResourceKind::Project, project.id, Some(&owner))
        .await?;
    assert_eq!(views, 1);

    let outcome = service.like(ResourceKind::Project, project.id, &admin).await?;
    assert!(outcome.active);
    assert_eq!(outcome.count, 1);

    Ok(())
}
