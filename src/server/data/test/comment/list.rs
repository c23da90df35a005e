use super::*;

/// Tests that soft-deleted comments are hidden from listings and counts.
///
/// Expected: only the live comment is listed and total == 1
#[tokio::test]
async fn hides_soft_deleted_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, tool) = factory::helpers::create_tool_with_submitter(db).await?;
    let live = factory::create_comment(db, "tool", tool.id, user.id).await?;
    CommentFactory::new(db, "tool", tool.id, user.id)
        .deleted()
        .build()
        .await?;

    let page = CommentRepository::new(db)
        .list(ResourceKind::Tool, tool.id, None, 20)
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.threads.len(), 1);
    assert_eq!(page.threads[0].comment.id, live.id);
    assert_eq!(page.next_cursor, None);

    Ok(())
}

/// Tests that replies are nested under their parent and deleted replies are skipped.
///
/// Expected: one thread with exactly the live reply
#[tokio::test]
async fn nests_live_replies() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, tool) = factory::helpers::create_tool_with_submitter(db).await?;
    let parent = factory::create_comment(db, "tool", tool.id, user.id).await?;
    let reply = factory::create_reply(db, &parent, user.id).await?;
    CommentFactory::new(db, "tool", tool.id, user.id)
        .parent(Some(parent.id))
        .deleted()
        .build()
        .await?;

    let page = CommentRepository::new(db)
        .list(ResourceKind::Tool, tool.id, None, 20)
        .await?;

    assert_eq!(page.total, 1);
    let thread = &page.threads[0];
    assert_eq!(thread.replies.len(), 1);
    assert_eq!(thread.replies[0].id, reply.id);
    assert_eq!(thread.replies[0].parent_id, Some(parent.id));

    Ok(())
}

/// Tests that a blank nickname falls back to the username.
///
/// Expected: the entry's nickname equals the author's username
#[tokio::test]
async fn falls_back_to_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::UserFactory::new(db)
        .nickname("")
        .build()
        .await?;
    let project = factory::create_project(db, author.id).await?;
    factory::create_comment(db, "project", project.id, author.id).await?;

    let page = CommentRepository::new(db)
        .list(ResourceKind::Project, project.id, None, 20)
        .await?;

    assert_eq!(page.threads[0].comment.nickname, author.username);

    Ok(())
}

/// Tests cursor pagination over top-level comments.
///
/// Expected: a full first page returns a cursor, the second page continues after it
#[tokio::test]
async fn pages_with_cursor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, tool) = factory::helpers::create_tool_with_submitter(db).await?;
    let mut ids = Vec::new();
    for _ in 0..3 {
        ids.push(factory::create_comment(db, "tool", tool.id, user.id).await?.id);
    }

    let repo = CommentRepository::new(db);
    let first = repo.list(ResourceKind::Tool, tool.id, None, 2).await?;
    assert_eq!(first.threads.len(), 2);
    assert_eq!(first.next_cursor, Some(ids[1]));
    assert_eq!(first.total, 3);

    let second = repo
        .list(ResourceKind::Tool, tool.id, first.next_cursor, 2)
        .await?;
    assert_eq!(second.threads.len(), 1);
    assert_eq!(second.threads[0].comment.id, ids[2]);
    assert_eq!(second.next_cursor, None);

    Ok(())
}

/// Tests that comments on another resource or kind are not listed.
///
/// Expected: an empty page
#[tokio::test]
async fn scopes_to_resource() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, tool) = factory::helpers::create_tool_with_submitter(db).await?;
    factory::create_comment(db, "course", tool.id, user.id).await?;

    let page = CommentRepository::new(db)
        .list(ResourceKind::Tool, tool.id, None, 20)
        .await?;

    assert_eq!(page.total, 0);
    assert!(page.threads.is_empty());

    Ok(())
}
