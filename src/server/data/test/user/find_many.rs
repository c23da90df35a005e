use super::*;

/// Tests batch loading users by id, ignoring duplicates and unknown ids.
///
/// Expected: a map with exactly the existing users
#[tokio::test]
async fn loads_existing_users_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    let users = repo.find_many(&[first.id, second.id, first.id, 9999]).await?;

    assert_eq!(users.len(), 2);
    assert_eq!(users[&first.id].username, first.username);
    assert_eq!(users[&second.id].username, second.username);
    assert!(repo.find_many(&[]).await?.is_empty());

    Ok(())
}
