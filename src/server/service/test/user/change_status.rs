use super::*;

/// Tests resubmitting a rejected tool.
///
/// Expected: Ok(StatusChange) from rejected to pending, reject reason cleared, one log row
#[tokio::test]
async fn resubmits_rejected_tool() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let tool = factory::tool::ToolFactory::new(db, owner.id)
        .status("rejected")
        .build()
        .await?;

    let change = UserService::new(db)
        .change_status(
            owner.id,
            ResourceKind::Tool,
            tool.id,
            "resubmit",
            Some("fixed the link".to_string()),
        )
        .await?;

    assert_eq!(change.old_status, "rejected");
    assert_eq!(change.new_status, "pending");

    let stored = entity::prelude::Tool::find_by_id(tool.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "pending");
    assert!(stored.reject_reason.is_none());

    let logs = entity::prelude::ResourceStatusLog::find().all(db).await?;
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].reason.as_deref(), Some("fixed the link"));

    Ok(())
}

/// Tests the rejection paths of a status change.
///
/// Expected: BadRequest for an unknown action, Forbidden for a stranger, NotFound for a
/// missing resource
#[tokio::test]
async fn rejects_bad_action_stranger_and_missing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let course = factory::create_course(db, owner.id).await?;
    let service = UserService::new(db);

    let bad_action = service
        .change_status(owner.id, ResourceKind::Course, course.id, "approve", None)
        .await;
    assert!(matches!(bad_action, Err(AppError::BadRequest(_))));

    let stranger_result = service
        .change_status(stranger.id, ResourceKind::Course, course.id, "pending", None)
        .await;
    assert!(matches!(stranger_result, Err(AppError::Forbidden(_))));

    let missing = service
        .change_status(owner.id, ResourceKind::Course, course.id + 100, "pending", None)
        .await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}
