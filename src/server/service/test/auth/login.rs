use super::*;

/// Tests logging in with each kind of identifier.
///
/// Expected: username, email, and nickname all resolve to the same account
#[tokio::test]
async fn accepts_username_email_and_nickname() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtKeys::new(SECRET);
    let service = AuthService::new(db, &jwt, None);

    let registered = service
        .register(register_params("dave", "dave@example.com", "pw123"))
        .await?;
    crate::server::data::user::UserRepository::new(db)
        .update_profile(
            registered.user.id,
            crate::server::model::user::UpdateProfileParams {
                nickname: Some("Davey".to_string()),
                avatar: None,
                description: None,
                face_photo: None,
            },
        )
        .await?;

    for identifier in ["dave", "dave@example.com", "Davey"] {
        let signed_in = service.login(identifier, "pw123").await?;
        assert_eq!(signed_in.user.id, registered.user.id, "{}", identifier);
    }

    Ok(())
}

/// Tests a wrong password and an unknown account.
///
/// Expected: Err(AuthErr(InvalidCredentials)) for both
#[tokio::test]
async fn rejects_bad_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtKeys::new(SECRET);
    let service = AuthService::new(db, &jwt, None);
    service
        .register(register_params("erin", "erin@example.com", "right"))
        .await?;

    let wrong = service.login("erin", "wrong").await;
    assert!(matches!(
        wrong,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    let unknown = service.login("nobody@example.com", "right").await;
    assert!(matches!(
        unknown,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
