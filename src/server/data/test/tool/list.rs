use super::*;

/// Tests that the public listing only returns approved tools.
///
/// Expected: the pending and rejected tools are absent
#[tokio::test]
async fn lists_only_approved() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let approved = factory::create_tool(db, user.id).await?;
    for status in ["pending", "rejected"] {
        factory::tool::ToolFactory::new(db, user.id)
            .status(status)
            .build()
            .await?;
    }

    let tools = ToolRepository::new(db).list(filter()).await?;

    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0].tool.id, approved.id);

    Ok(())
}

/// Tests category and tag filters.
///
/// Expected: only tools in a listed category carrying a listed tag
#[tokio::test]
async fn filters_by_category_and_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let editor = factory::tool::ToolFactory::new(db, user.id)
        .category("editor")
        .build()
        .await?;
    let other_editor = factory::tool::ToolFactory::new(db, user.id)
        .category("editor")
        .build()
        .await?;
    let debugger = factory::tool::ToolFactory::new(db, user.id)
        .category("debugger")
        .build()
        .await?;
    factory::helpers::add_tool_tags(db, editor.id, &["rust"]).await?;
    factory::helpers::add_tool_tags(db, other_editor.id, &["go"]).await?;
    factory::helpers::add_tool_tags(db, debugger.id, &["rust"]).await?;

    let tools = ToolRepository::new(db)
        .list(ToolListFilter {
            categories: vec!["editor".to_string()],
            tags: vec!["rust".to_string(), "zig".to_string()],
            ..filter()
        })
        .await?;

    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0].tool.id, editor.id);
    assert_eq!(tools[0].tags, vec!["rust"]);

    Ok(())
}

/// Tests sorting by views and paging by id cursor.
///
/// Expected: most viewed first; the cursor excludes ids at or above it
#[tokio::test]
async fn sorts_by_views_and_applies_cursor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let low = factory::tool::ToolFactory::new(db, user.id).views(1).build().await?;
    let high = factory::tool::ToolFactory::new(db, user.id).views(50).build().await?;
    let mid = factory::tool::ToolFactory::new(db, user.id).views(10).build().await?;

    let repo = ToolRepository::new(db);
    let sorted = repo
        .list(ToolListFilter {
            sort: ListSort::Views,
            ..filter()
        })
        .await?;
    let ids: Vec<i32> = sorted.iter().map(|t| t.tool.id).collect();
    assert_eq!(ids, vec![high.id, mid.id, low.id]);

    let before_mid = repo
        .list(ToolListFilter {
            page: CursorPage::new(Some(mid.id), None),
            ..filter()
        })
        .await?;
    assert!(before_mid.iter().all(|t| t.tool.id < mid.id));
    assert_eq!(before_mid.len(), 2);

    Ok(())
}
