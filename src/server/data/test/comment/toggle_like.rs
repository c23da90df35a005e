use super::*;

/// Tests toggling a comment like on and off.
///
/// Expected: (true, 1) then (false, 0)
#[tokio::test]
async fn toggles_like() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, tool) = factory::helpers::create_tool_with_submitter(db).await?;
    let comment = factory::create_comment(db, "tool", tool.id, user.id).await?;
    let repo = CommentRepository::new(db);

    let on = repo
        .toggle_like(ResourceKind::Tool, tool.id, comment.id, user.id)
        .await?
        .unwrap();
    assert!(on.active);
    assert_eq!(on.count, 1);

    let off = repo
        .toggle_like(ResourceKind::Tool, tool.id, comment.id, user.id)
        .await?
        .unwrap();
    assert!(!off.active);
    assert_eq!(off.count, 0);

    Ok(())
}

/// Tests liking a deleted comment.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_deleted_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, tool) = factory::helpers::create_tool_with_submitter(db).await?;
    let comment = CommentFactory::new(db, "tool", tool.id, user.id)
        .deleted()
        .build()
        .await?;

    let result = CommentRepository::new(db)
        .toggle_like(ResourceKind::Tool, tool.id, comment.id, user.id)
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests liking a comment through another resource's path.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_other_resource() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, tool) = factory::helpers::create_tool_with_submitter(db).await?;
    let comment = factory::create_comment(db, "tool", tool.id, user.id).await?;

    let result = CommentRepository::new(db)
        .toggle_like(ResourceKind::Course, tool.id, comment.id, user.id)
        .await?;

    assert!(result.is_none());

    Ok(())
}
