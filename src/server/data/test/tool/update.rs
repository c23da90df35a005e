use super::*;

/// Tests editing an approved tool.
///
/// Verifies fields, tags, and images are replaced and the tool goes back to pending.
///
/// Expected: Ok(Some) with the new tags and status pending
#[tokio::test]
async fn replaces_relations_and_resets_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let tool = factory::create_tool(db, user.id).await?;
    factory::helpers::add_tool_tags(db, tool.id, &["old"]).await?;

    let mut new_fields = fields("renamed");
    new_fields.tags = vec!["new".to_string()];
    new_fields.images = Vec::new();

    let updated = ToolRepository::new(db)
        .update(tool.id, new_fields)
        .await?
        .unwrap();

    assert_eq!(updated.tool.name, "renamed");
    assert_eq!(updated.tool.status, "pending");
    assert_eq!(updated.tags, vec!["new"]);
    assert!(updated.images.is_empty());

    Ok(())
}

/// Tests editing a missing tool.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_tool() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ToolRepository::new(db).update(31, fields("x")).await?;

    assert!(result.is_none());

    Ok(())
}
