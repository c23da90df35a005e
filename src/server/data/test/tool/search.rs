use super::*;

/// Tests keyword search over name and description.
///
/// Expected: tools matching in either field; pending tools are excluded
#[tokio::test]
async fn matches_name_or_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let by_name = factory::tool::ToolFactory::new(db, user.id)
        .name("Graph Viewer")
        .build()
        .await?;
    let by_description = factory::tool::ToolFactory::new(db, user.id)
        .description("renders a graph of calls")
        .build()
        .await?;
    factory::tool::ToolFactory::new(db, user.id)
        .name("graph pending")
        .status("pending")
        .build()
        .await?;
    factory::create_tool(db, user.id).await?;

    let found = ToolRepository::new(db)
        .search("raph", CursorPage::new(None, None))
        .await?;
    let mut ids: Vec<i32> = found.iter().map(|t| t.tool.id).collect();
    ids.sort();

    assert_eq!(ids, vec![by_name.id, by_description.id]);

    Ok(())
}
