use super::*;

/// Tests the tech filter over approved projects.
///
/// Expected: only approved projects listing one of the requested techs
#[tokio::test]
async fn filters_by_tech() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = ProjectRepository::new(db);

    // Created through the repository, so they start pending.
    let submitted = repo.create(fields(), user.id).await?;
    let approved = factory::create_project(db, user.id).await?;

    let none = repo
        .list(ProjectListFilter {
            categories: Vec::new(),
            tech: vec!["rust".to_string()],
            sort: ListSort::Newest,
            page: CursorPage::new(None, None),
        })
        .await?;
    assert!(none.iter().all(|p| p.project.id != submitted.project.id));

    let all = repo
        .list(ProjectListFilter {
            categories: Vec::new(),
            tech: Vec::new(),
            sort: ListSort::Loves,
            page: CursorPage::new(None, None),
        })
        .await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].project.id, approved.id);

    Ok(())
}
