use super::*;

fn review(
    item_id: i32,
    action: &str,
    kind: Option<&str>,
    reason: Option<&str>,
    operator_id: i32,
) -> ReviewParams {
    ReviewParams {
        item_id,
        action: action.to_string(),
        resource_type: kind.map(str::to_string),
        reject_reason: reason.map(str::to_string),
        operator_id,
    }
}

/// Tests rejecting a project with a reason.
///
/// Expected: status rejected, audit time and reason stored, one log row
#[tokio::test]
async fn rejects_with_reason() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;
    let user = factory::create_user(db).await?;
    let project = factory::project::ProjectFactory::new(db, user.id)
        .status("pending")
        .build()
        .await?;

    let change = AdminService::new(db)
        .review(review(project.id, "reject", Some("project"), Some("no readme"), admin.id))
        .await?;

    assert_eq!(change.new_status, "rejected");
    assert_eq!(change.reject_reason.as_deref(), Some("no readme"));

    let stored = entity::prelude::Project::find_by_id(project.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "rejected");
    assert_eq!(stored.reject_reason.as_deref(), Some("no readme"));
    assert!(stored.audit_time.is_some());
    assert_eq!(entity::prelude::ResourceStatusLog::find().all(db).await?.len(), 1);

    Ok(())
}

/// Tests approving with the default resource type.
///
/// Expected: the tool is approved and any reject reason is dropped
#[tokio::test]
async fn approves_tool_by_default() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;
    let tool = factory::tool::ToolFactory::new(db, admin.id)
        .status("pending")
        .build()
        .await?;

    let change = AdminService::new(db)
        .review(review(tool.id, "approved", None, Some("ignored"), admin.id))
        .await?;

    assert_eq!(change.kind, ResourceKind::Tool);
    assert_eq!(change.new_status, "approved");
    assert!(change.reject_reason.is_none());

    Ok(())
}

/// Tests an unknown action and a missing item.
///
/// Expected: BadRequest and NotFound, with no log rows written
#[tokio::test]
async fn rejects_unknown_action_and_missing_item() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;
    let tool = factory::create_tool(db, admin.id).await?;
    let service = AdminService::new(db);

    let unknown = service.review(review(tool.id, "archive", None, None, admin.id)).await;
    assert!(matches!(unknown, Err(AppError::BadRequest(_))));

    let missing = service
        .review(review(tool.id + 100, "approve", None, None, admin.id))
        .await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    assert!(entity::prelude::ResourceStatusLog::find().all(db).await?.is_empty());

    Ok(())
}
