use super::*;

/// Tests submitting a tool.
///
/// Expected: stored as pending with the submitter as contributor
#[tokio::test]
async fn stores_pending_submission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let tool = ToolService::new(db)
        .submit(fields(&["search", "cli"]), user.id)
        .await?;

    assert_eq!(tool.tool.status, "pending");
    assert_eq!(tool.tags.len(), 2);
    assert_eq!(tool.contributors.len(), 1);
    assert_eq!(tool.contributors[0].id, user.id);

    Ok(())
}

/// Tests submitting a tool without tags.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn requires_tags() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let result = ToolService::new(db).submit(fields(&[]), user.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that only the submitter may edit a tool.
///
/// Expected: Err(Forbidden) for another user, Ok for the submitter
#[tokio::test]
async fn update_limited_to_submitter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let tool = factory::create_tool(db, owner.id).await?;
    let service = ToolService::new(db);

    let denied = service.update(tool.id, fields(&["x"]), stranger.id).await;
    assert!(matches!(denied, Err(AppError::Forbidden(_))));

    let updated = service.update(tool.id, fields(&["x"]), owner.id).await?;
    assert_eq!(updated.tool.status, "pending");
    assert_eq!(updated.tool.name, "Ripgrep");

    Ok(())
}
