use super::*;

/// Tests an admin approval.
///
/// Verifies that the status and audit time are set, the reject reason is cleared, and a
/// status log row records the transition.
///
/// Expected: Some(StatusChange) from pending to approved, one log row
#[tokio::test]
async fn approval_sets_audit_time_and_logs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let submitter = factory::create_user(db).await?;
    let admin = factory::create_admin(db).await?;
    let tool = factory::tool::ToolFactory::new(db, submitter.id)
        .status("pending")
        .build()
        .await?;

    let change = ResourceRepository::new(db)
        .update_status(
            ResourceKind::Tool,
            tool.id,
            StatusUpdate {
                status: ReviewStatus::Approved,
                reject_reason: None,
                audited: true,
                operator_id: admin.id,
                log_reason: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(change.old_status, "pending");
    assert_eq!(change.new_status, "approved");

    let stored = entity::prelude::Tool::find_by_id(tool.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "approved");
    assert!(stored.audit_time.is_some());
    assert!(stored.reject_reason.is_none());

    let logs = entity::prelude::ResourceStatusLog::find().all(db).await?;
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].resource_type, "tool");
    assert_eq!(logs[0].resource_id, tool.id);
    assert_eq!(logs[0].operator_id, admin.id);
    assert_eq!(logs[0].old_status, "pending");
    assert_eq!(logs[0].new_status, "approved");

    Ok(())
}

/// Tests a rejection stores the reason.
///
/// Expected: status rejected with the given reason
#[tokio::test]
async fn rejection_stores_reason() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let submitter = factory::create_user(db).await?;
    let admin = factory::create_admin(db).await?;
    let project = factory::project::ProjectFactory::new(db, submitter.id)
        .status("pending")
        .build()
        .await?;

    ResourceRepository::new(db)
        .update_status(
            ResourceKind::Project,
            project.id,
            StatusUpdate {
                status: ReviewStatus::Rejected,
                reject_reason: Some("duplicate".to_string()),
                audited: true,
                operator_id: admin.id,
                log_reason: Some("duplicate".to_string()),
            },
        )
        .await?;

    let stored = entity::prelude::Project::find_by_id(project.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "rejected");
    assert_eq!(stored.reject_reason.as_deref(), Some("duplicate"));

    Ok(())
}

/// Tests a status change on a missing resource.
///
/// Expected: Ok(None) and no log row
#[tokio::test]
async fn returns_none_for_missing_resource() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;

    let change = ResourceRepository::new(db)
        .update_status(
            ResourceKind::Course,
            12,
            StatusUpdate {
                status: ReviewStatus::Approved,
                reject_reason: None,
                audited: true,
                operator_id: admin.id,
                log_reason: None,
            },
        )
        .await?;

    assert!(change.is_none());
    assert!(entity::prelude::ResourceStatusLog::find()
        .all(db)
        .await?
        .is_empty());

    Ok(())
}
