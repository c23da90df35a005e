use super::*;

/// Tests that only pending rows are queued and totals count all pages.
///
/// Expected: page 0 holds 2 of the 3 pending tools, total == 3
#[tokio::test]
async fn pages_pending_tools() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    for _ in 0..3 {
        factory::tool::ToolFactory::new(db, user.id)
            .status("pending")
            .build()
            .await?;
    }
    factory::create_tool(db, user.id).await?;

    let repo = ResourceRepository::new(db);
    let (items, total) = repo.pending_page(ResourceKind::Tool, 0, 2).await?;
    assert_eq!(total, 3);
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|i| i.status == "pending"));

    let (rest, _) = repo.pending_page(ResourceKind::Tool, 1, 2).await?;
    assert_eq!(rest.len(), 1);

    Ok(())
}
