use super::*;

/// Tests the liked/collected flags for a viewer.
///
/// Expected: flags reflect only the viewer's own marks
#[tokio::test]
async fn reports_viewer_marks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, tool) = factory::helpers::create_tool_with_submitter(db).await?;
    let viewer = factory::create_user(db).await?;
    let repo = EngagementRepository::new(db);

    repo.like(ResourceKind::Tool, tool.id, owner.id).await?;
    repo.collect(ResourceKind::Tool, tool.id, viewer.id).await?;

    let owner_flags = repo.flags(ResourceKind::Tool, tool.id, owner.id).await?;
    let viewer_flags = repo.flags(ResourceKind::Tool, tool.id, viewer.id).await?;

    assert!(owner_flags.isliked && !owner_flags.iscollected);
    assert!(!viewer_flags.isliked && viewer_flags.iscollected);

    Ok(())
}
