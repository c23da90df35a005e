use super::*;

/// Tests posting a comment with blank content.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_blank_content() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = User::from_entity(factory::create_user(db).await?);
    let tool = factory::create_tool(db, user.id).await?;

    let result = CommentService::new(db)
        .create(ResourceKind::Tool, tool.id, &user, "   ")
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests commenting on a resource that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_missing_resource() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = User::from_entity(factory::create_user(db).await?);

    let result = CommentService::new(db)
        .create(ResourceKind::Course, 999, &user, "hello")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests posting a comment.
///
/// Expected: trimmed content and no replies
#[tokio::test]
async fn creates_trimmed_comment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = User::from_entity(factory::create_user(db).await?);
    let project = factory::create_project(db, user.id).await?;

    let comment = CommentService::new(db)
        .create(ResourceKind::Project, project.id, &user, "  nice work \n")
        .await?;

    assert_eq!(comment.content, "nice work");
    assert_eq!(comment.parent_id, None);
    assert_eq!(comment.reply_total, 0);

    Ok(())
}
