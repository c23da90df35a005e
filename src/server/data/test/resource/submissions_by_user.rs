use super::*;

/// Tests listing a user's submissions with and without a status filter.
///
/// Expected: all own tools without a filter, only pending ones with it
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_tool(db, user.id).await?;
    let pending = factory::tool::ToolFactory::new(db, user.id)
        .status("pending")
        .build()
        .await?;
    factory::create_tool(db, other.id).await?;

    let repo = ResourceRepository::new(db);
    let all = repo
        .submissions_by_user(ResourceKind::Tool, user.id, None)
        .await?;
    let only_pending = repo
        .submissions_by_user(ResourceKind::Tool, user.id, Some(ReviewStatus::Pending))
        .await?;

    assert_eq!(all.len(), 2);
    assert_eq!(only_pending.len(), 1);
    assert_eq!(only_pending[0].id, pending.id);

    Ok(())
}
