use super::*;

/// Tests editing a project keeps its authors and resets review.
///
/// Expected: new tech stack, status pending, authors unchanged
#[tokio::test]
async fn keeps_authors_and_resets_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let co_author = factory::create_user(db).await?;
    let project = factory::create_project(db, user.id).await?;
    factory::helpers::add_project_author(db, project.id, co_author.id).await?;

    let mut new_fields = fields();
    new_fields.tech_stack = vec!["go".to_string()];
    new_fields.images = Vec::new();

    let updated = ProjectRepository::new(db)
        .update(project.id, new_fields)
        .await?
        .unwrap();

    assert_eq!(updated.project.status, "pending");
    assert_eq!(updated.tech_stack, vec!["go"]);
    assert!(updated.project.cover.is_none());
    assert_eq!(updated.authors.len(), 1);
    assert_eq!(updated.authors[0].id, co_author.id);

    Ok(())
}
