use super::*;

/// Tests creating a new account.
///
/// Verifies that the repository stores the account and returns it without exposing the
/// password hash.
///
/// Expected: Ok with the stored username, email, and role
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "hash".to_string(),
            nickname: "alice".to_string(),
            role: ROLE_USER.to_string(),
        })
        .await?;

    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@example.com");
    assert!(!user.is_admin());
    assert!(repo.username_taken("alice").await?);
    assert!(repo.email_taken("alice@example.com").await?);

    Ok(())
}

/// Tests that a duplicate username is rejected by the unique index.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    let result = repo
        .create(CreateUserParams {
            username: existing.username.clone(),
            email: "other@example.com".to_string(),
            password_hash: "hash".to_string(),
            nickname: "other".to_string(),
            role: ROLE_USER.to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
