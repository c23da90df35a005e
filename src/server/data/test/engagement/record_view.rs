use super::*;

/// Tests that each view increments the counter.
///
/// Expected: Some(1) then Some(2)
#[tokio::test]
async fn increments_views() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let course = factory::create_course(db, user.id).await?;
    let repo = EngagementRepository::new(db);

    assert_eq!(repo.record_view(ResourceKind::Course, course.id).await?, Some(1));
    assert_eq!(repo.record_view(ResourceKind::Course, course.id).await?, Some(2));

    Ok(())
}

/// Tests viewing a resource that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_resource() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EngagementRepository::new(db);

    assert_eq!(repo.record_view(ResourceKind::Project, 7).await?, None);

    Ok(())
}
