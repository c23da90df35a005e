use super::*;

/// Tests that decrementing a counter at zero leaves it at zero.
///
/// Expected: Ok(false) and views == 0
#[tokio::test]
async fn decrement_is_floored_at_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, tool) = factory::helpers::create_tool_with_submitter(db).await?;
    let repo = ResourceRepository::new(db);

    let changed = repo
        .adjust_counter(ResourceKind::Tool, tool.id, Counter::Views, Step::Down)
        .await?;

    assert!(!changed);
    let counters = repo.counters(ResourceKind::Tool, tool.id).await?.unwrap();
    assert_eq!(counters.views, 0);

    Ok(())
}

/// Tests moving a counter up and down.
///
/// Expected: only the targeted counter changes
#[tokio::test]
async fn moves_only_target_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let course = factory::create_course(db, user.id).await?;
    let repo = ResourceRepository::new(db);

    for _ in 0..2 {
        repo.adjust_counter(ResourceKind::Course, course.id, Counter::Collections, Step::Up)
            .await?;
    }
    repo.adjust_counter(ResourceKind::Course, course.id, Counter::Collections, Step::Down)
        .await?;

    let counters = repo.counters(ResourceKind::Course, course.id).await?.unwrap();
    assert_eq!(counters.collections, 1);
    assert_eq!(counters.loves, 0);
    assert_eq!(counters.views, 0);

    Ok(())
}
