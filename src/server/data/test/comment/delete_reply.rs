use super::*;

/// Tests that deleting a reply never drives the parent's reply_total below zero.
///
/// The parent is created with reply_total 0 even though a reply exists.
///
/// Expected: Deleted and reply_total == 0
#[tokio::test]
async fn floors_reply_total_at_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, tool) = factory::helpers::create_tool_with_submitter(db).await?;
    let parent = factory::create_comment(db, "tool", tool.id, user.id).await?;
    let reply = factory::create_reply(db, &parent, user.id).await?;

    let result = CommentRepository::new(db)
        .delete_reply(ResourceKind::Tool, tool.id, reply.id, user.id)
        .await?;

    assert_eq!(result, ReplyDeletion::Deleted);
    let stored = entity::prelude::Comment::find_by_id(parent.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.reply_total, 0);

    Ok(())
}

/// Tests the normal decrement after a reply.
///
/// Expected: reply_total goes 1 then 0 and the reply is hidden
#[tokio::test]
async fn decrements_reply_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, tool) = factory::helpers::create_tool_with_submitter(db).await?;
    let parent = factory::create_comment(db, "tool", tool.id, user.id).await?;
    let repo = CommentRepository::new(db);

    let reply = repo
        .reply(ResourceKind::Tool, tool.id, parent.id, user.id, "x".to_string())
        .await?
        .unwrap();
    repo.delete_reply(ResourceKind::Tool, tool.id, reply.id, user.id)
        .await?;

    let page = repo.list(ResourceKind::Tool, tool.id, None, 20).await?;
    assert_eq!(page.threads[0].comment.reply_total, 0);
    assert!(page.threads[0].replies.is_empty());

    Ok(())
}

/// Tests deleting a top-level comment through the reply endpoint.
///
/// Expected: NotAReply
#[tokio::test]
async fn rejects_top_level_target() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, tool) = factory::helpers::create_tool_with_submitter(db).await?;
    let parent = factory::create_comment(db, "tool", tool.id, user.id).await?;

    let result = CommentRepository::new(db)
        .delete_reply(ResourceKind::Tool, tool.id, parent.id, user.id)
        .await?;

    assert_eq!(result, ReplyDeletion::NotAReply);

    Ok(())
}

/// Tests deleting someone else's reply.
///
/// Expected: NotFound
#[tokio::test]
async fn ignores_other_users_reply() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, tool) = factory::helpers::create_tool_with_submitter(db).await?;
    let other = factory::create_user(db).await?;
    let parent = factory::create_comment(db, "tool", tool.id, user.id).await?;
    let reply = factory::create_reply(db, &parent, user.id).await?;

    let result = CommentRepository::new(db)
        .delete_reply(ResourceKind::Tool, tool.id, reply.id, other.id)
        .await?;

    assert_eq!(result, ReplyDeletion::NotFound);

    Ok(())
}
