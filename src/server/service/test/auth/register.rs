use super::*;

/// Tests registering a new account.
///
/// Verifies that the nickname defaults to the username, the role is `user`, and the issued
/// token carries the new user's id.
///
/// Expected: Ok(SignedInUser) with a verifiable token
#[tokio::test]
async fn registers_and_signs_in() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtKeys::new(SECRET);

    let signed_in = AuthService::new(db, &jwt, None)
        .register(register_params("  alice ", "alice@example.com", "secret"))
        .await?;

    assert_eq!(signed_in.user.username, "alice");
    assert_eq!(signed_in.user.nickname, "alice");
    assert_eq!(signed_in.user.role, "user");
    let claims = jwt.verify(&signed_in.token).unwrap();
    assert_eq!(claims.user_id()?, signed_in.user.id);

    Ok(())
}

/// Tests registering with a username or email that is already taken.
///
/// Expected: Err(BadRequest) naming the duplicated field
#[tokio::test]
async fn rejects_duplicate_username_and_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtKeys::new(SECRET);
    let existing = factory::user::UserFactory::new(db)
        .username("bob")
        .email("bob@example.com")
        .build()
        .await?;
    let service = AuthService::new(db, &jwt, None);

    let result = service
        .register(register_params(&existing.username, "other@example.com", "pw"))
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "username already exists"));

    let result = service
        .register(register_params("bobby", &existing.email, "pw"))
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "email already exists"));

    Ok(())
}

/// Tests registering a username that another account already uses as its nickname.
///
/// Expected: Err(BadRequest) and no new account
#[tokio::test]
async fn rejects_username_matching_existing_nickname() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtKeys::new(SECRET);
    factory::user::UserFactory::new(db)
        .username("dave")
        .nickname("dee")
        .build()
        .await?;
    let service = AuthService::new(db, &jwt, None);

    let result = service
        .register(register_params("dee", "dee@example.com", "pw"))
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "nickname already exists"));

    let result = service.login("dee", "pw").await;
    assert!(result.is_err());

    Ok(())
}

/// Tests the invite code check when one is configured.
///
/// Expected: Err(BadRequest) without the code, Ok with it
#[tokio::test]
async fn enforces_configured_invite_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtKeys::new(SECRET);
    let service = AuthService::new(db, &jwt, Some("letmein"));

    let result = service
        .register(register_params("carol", "carol@example.com", "pw"))
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let mut params = register_params("carol", "carol@example.com", "pw");
    params.invite_code = Some("letmein".to_string());
    assert!(service.register(params).await.is_ok());

    Ok(())
}
