use super::*;

/// Tests replying to a live top-level comment.
///
/// Expected: the reply points at the parent and the parent's reply_total is 1
#[tokio::test]
async fn creates_reply_and_bumps_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, tool) = factory::helpers::create_tool_with_submitter(db).await?;
    let parent = factory::create_comment(db, "tool", tool.id, user.id).await?;

    let reply = CommentRepository::new(db)
        .reply(ResourceKind::Tool, tool.id, parent.id, user.id, "same".to_string())
        .await?
        .unwrap();

    assert_eq!(reply.parent_id, Some(parent.id));
    assert_eq!(reply.content, "same");

    let stored = entity::prelude::Comment::find_by_id(parent.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.reply_total, 1);

    Ok(())
}

/// Tests that replies cannot nest under replies.
///
/// Expected: Ok(None)
#[tokio::test]
async fn rejects_reply_to_reply() -> Result<(), DbErr> {
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
        .reply(ResourceKind::Tool, tool.id, reply.id, user.id, "deeper".to_string())
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests replying to a soft-deleted comment.
///
/// Expected: Ok(None)
#[tokio::test]
async fn rejects_reply_to_deleted_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, tool) = factory::helpers::create_tool_with_submitter(db).await?;
    let parent = CommentFactory::new(db, "tool", tool.id, user.id)
        .deleted()
        .build()
        .await?;

    let result = CommentRepository::new(db)
        .reply(ResourceKind::Tool, tool.id, parent.id, user.id, "hi".to_string())
        .await?;

    assert!(result.is_none());

    Ok(())
}
