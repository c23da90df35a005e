use super::*;

/// Tests optional auth without a header.
///
/// Expected: Ok(None)
#[tokio::test]
async fn anonymous_without_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let jwt = JwtKeys::new(SECRET);
    let headers = HeaderMap::new();

    let user = AuthGuard::new(db, &jwt, &headers).optional().await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests optional auth with a garbage token.
///
/// Expected: Ok(None) instead of an error
#[tokio::test]
async fn anonymous_with_invalid_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let jwt = JwtKeys::new(SECRET);
    let headers = bearer("not.a.jwt");

    let user = AuthGuard::new(db, &jwt, &headers).optional().await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests optional auth with a valid token.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn resolves_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let jwt = JwtKeys::new(SECRET);
    let token = jwt.issue(user.id, &user.username, &user.role)?;
    let headers = bearer(&token);

    let resolved = AuthGuard::new(db, &jwt, &headers).optional().await?;

    assert_eq!(resolved.map(|u| u.id), Some(user.id));

    Ok(())
}
