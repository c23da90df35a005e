use super::*;

/// Tests submitting a tool.
///
/// Verifies the tool is stored as pending with its tags and images, and the submitter is
/// recorded as the only contributor.
///
/// Expected: Ok(ToolWithRelations) with status pending
#[tokio::test]
async fn stores_pending_tool_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let created = ToolRepository::new(db).create(fields("ripgrep"), user.id).await?;

    assert_eq!(created.tool.status, "pending");
    assert_eq!(created.tool.submitter_id, user.id);
    assert_eq!(created.tags, vec!["search", "cli"]);
    assert_eq!(created.images.len(), 1);
    assert_eq!(created.contributors.len(), 1);
    assert_eq!(created.contributors[0].id, user.id);

    Ok(())
}
