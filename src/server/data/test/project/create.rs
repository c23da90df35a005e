use super::*;

/// Tests uploading a project.
///
/// Expected: pending project whose cover is the first image and whose author is the caller
#[tokio::test]
async fn first_image_becomes_cover() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let created = ProjectRepository::new(db).create(fields(), user.id).await?;

    assert_eq!(created.project.status, "pending");
    assert_eq!(
        created.project.cover.as_deref(),
        Some("/uploads/images/2025/02/cover.png")
    );
    assert_eq!(created.images.len(), 2);
    assert_eq!(created.tech_stack, vec!["rust", "svelte"]);
    assert_eq!(created.authors.len(), 1);
    assert_eq!(created.authors[0].id, user.id);

    Ok(())
}
