use super::*;

/// Tests that project authors other than the submitter own the project.
///
/// Expected: submitter and author own it, a stranger does not
#[tokio::test]
async fn project_authors_are_owners() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let submitter = factory::create_user(db).await?;
    let author = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let project = factory::create_project(db, submitter.id).await?;
    factory::helpers::add_project_author(db, project.id, author.id).await?;

    let repo = ResourceRepository::new(db);
    assert!(repo.is_owner(ResourceKind::Project, project.id, submitter.id).await?);
    assert!(repo.is_owner(ResourceKind::Project, project.id, author.id).await?);
    assert!(!repo.is_owner(ResourceKind::Project, project.id, stranger.id).await?);

    Ok(())
}

/// Tests tool ownership and a missing resource.
///
/// Expected: only the submitter owns the tool, nobody owns a missing one
#[tokio::test]
async fn tool_owner_is_submitter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (submitter, tool) = factory::helpers::create_tool_with_submitter(db).await?;
    let other = factory::create_user(db).await?;

    let repo = ResourceRepository::new(db);
    assert!(repo.is_owner(ResourceKind::Tool, tool.id, submitter.id).await?);
    assert!(!repo.is_owner(ResourceKind::Tool, tool.id, other.id).await?);
    assert!(!repo.is_owner(ResourceKind::Tool, 999, submitter.id).await?);

    Ok(())
}
