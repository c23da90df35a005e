use super::*;

/// Tests reading and writing comments on a tool that is still pending review.
///
/// Expected: NotFound for anonymous readers and strangers, Ok for the submitter
#[tokio::test]
async fn pending_tool_comments_hidden_from_others() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = User::from_entity(factory::create_user(db).await?);
    let stranger = User::from_entity(factory::create_user(db).await?);
    let tool = factory::tool::ToolFactory::new(db, owner.id)
        .status("pending")
        .build()
        .await?;
    let top = factory::create_comment(db, "tool", tool.id, owner.id).await?;
    let service = CommentService::new(db);

    let anonymous = service
        .list(ResourceKind::Tool, tool.id, None, None, None)
        .await;
    assert!(matches!(anonymous, Err(AppError::NotFound(_))));

    let posted = service
        .create(ResourceKind::Tool, tool.id, &stranger, "first!")
        .await;
    assert!(matches!(posted, Err(AppError::NotFound(_))));

    let replied = service
        .reply(ResourceKind::Tool, tool.id, top.id, &stranger, "me too")
        .await;
    assert!(matches!(replied, Err(AppError::NotFound(_))));

    let liked = service
        .toggle_like(ResourceKind::Tool, tool.id, top.id, &stranger)
        .await;
    assert!(matches!(liked, Err(AppError::NotFound(_))));

    let page = service
        .list(ResourceKind::Tool, tool.id, None, None, Some(&owner))
        .await?;
    assert_eq!(page.threads.len(), 1);

    Ok(())
}
