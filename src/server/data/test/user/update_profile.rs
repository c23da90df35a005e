use super::*;

/// Tests a partial profile update.
///
/// Verifies that provided fields are stored and absent fields keep their values.
///
/// Expected: Ok(Some(User)) with the new nickname and the original avatar
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .avatar(Some("/uploads/images/2025/01/a.png".to_string()))
        .build()
        .await?;
    let repo = UserRepository::new(db);

    let updated = repo
        .update_profile(
            user.id,
            UpdateProfileParams {
                nickname: Some("renamed".to_string()),
                description: Some("hello".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.nickname, "renamed");
    assert_eq!(updated.description.as_deref(), Some("hello"));
    assert_eq!(updated.avatar, user.avatar);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update_profile(42, UpdateProfileParams::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests credential updates.
///
/// Expected: the new email and hash are stored
#[tokio::test]
async fn updates_email_and_password() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    repo.update_email(user.id, "new@example.com").await?;
    repo.update_password(user.id, "new-hash").await?;

    let stored = repo.find_credentials_by_email("new@example.com").await?.unwrap();
    assert_eq!(stored.id, user.id);
    assert_eq!(stored.password_hash, "new-hash");

    Ok(())
}
