use super::*;

/// Tests the merged review queue across all kinds.
///
/// Verifies that pending items of every kind are merged oldest first, that approved items
/// are excluded, and that the total spans all queues.
///
/// Expected: page 0 holds the two older tools, page 1 the course and project
#[tokio::test]
async fn merges_all_kinds_by_submit_time() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let oldest = factory::tool::ToolFactory::new(db, user.id)
        .status("pending")
        .created_at(Utc::now() - Duration::hours(2))
        .build()
        .await?;
    let older = factory::tool::ToolFactory::new(db, user.id)
        .status("pending")
        .created_at(Utc::now() - Duration::hours(1))
        .build()
        .await?;
    factory::course::CourseFactory::new(db, user.id)
        .status("pending")
        .build()
        .await?;
    factory::project::ProjectFactory::new(db, user.id)
        .status("pending")
        .build()
        .await?;
    factory::create_tool(db, user.id).await?;
    let service = AdminService::new(db);

    let first = service.pending(None, 0, 2).await?;
    assert_eq!(first.total, 4);
    assert_eq!(first.total_pages, 2);
    let ids: Vec<_> = first.items.iter().map(|i| (i.kind, i.id)).collect();
    assert_eq!(
        ids,
        vec![(ResourceKind::Tool, oldest.id), (ResourceKind::Tool, older.id)]
    );

    let second = service.pending(None, 1, 2).await?;
    let kinds: Vec<_> = second.items.iter().map(|i| i.kind).collect();
    assert_eq!(kinds.len(), 2);
    assert!(kinds.contains(&ResourceKind::Course));
    assert!(kinds.contains(&ResourceKind::Project));

    Ok(())
}

/// Tests filtering the queue by type.
///
/// Expected: tools only for `tools`, an empty page for `comments`, BadRequest for an
/// unknown type
#[tokio::test]
async fn filters_by_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::tool::ToolFactory::new(db, user.id)
        .status("pending")
        .build()
        .await?;
    factory::course::CourseFactory::new(db, user.id)
        .status("pending")
        .build()
        .await?;
    let service = AdminService::new(db);

    let tools = service.pending(Some("tools"), 0, 10).await?;
    assert_eq!(tools.total, 1);
    assert_eq!(tools.items[0].kind, ResourceKind::Tool);

    let comments = service.pending(Some("comments"), 0, 10).await?;
    assert_eq!(comments.total, 0);
    assert!(comments.items.is_empty());

    let unknown = service.pending(Some("videos"), 0, 10).await;
    assert!(matches!(unknown, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests asking the merged queue for a page past its end.
///
/// Expected: no items, with the real total still reported
#[tokio::test]
async fn merged_page_past_end_is_empty() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::tool::ToolFactory::new(db, user.id)
        .status("pending")
        .build()
        .await?;
    factory::project::ProjectFactory::new(db, user.id)
        .status("pending")
        .build()
        .await?;
    let service = AdminService::new(db);

    let page = service.pending(None, 1_000_000, MAX_ENTRIES).await?;
    assert!(page.items.is_empty());
    assert_eq!(page.total, 2);
    assert_eq!(page.total_pages, 1);

    let page = service.pending(None, u64::MAX, MAX_ENTRIES).await?;
    assert!(page.items.is_empty());
    assert_eq!(page.total, 2);

    Ok(())
}
