use super::*;

/// Tests that a user's own nickname does not count as taken.
///
/// Expected: taken for other users, free for the owner
#[tokio::test]
async fn ignores_own_nickname() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::UserFactory::new(db)
        .nickname("sparrow")
        .build()
        .await?;
    let other = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert!(!repo.nickname_taken("sparrow", owner.id).await?);
    assert!(repo.nickname_taken("sparrow", other.id).await?);

    Ok(())
}
