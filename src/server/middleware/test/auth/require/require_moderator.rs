use super::*;

/// Tests moderator passes the moderator permission check.
///
/// Expected: Ok(User) holding the moderator role
#[tokio::test]
async fn grants_access_to_moderator() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .roles(&["moderator", "user"])
        .build()
        .await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let returned_user = auth_guard.require(&[Permission::Moderator]).await?;

    assert!(returned_user.has_role(Role::Moderator));

    Ok(())
}

/// Tests an admin without the moderator role still passes the moderator
/// permission check.
///
/// Expected: Ok(User)
#[tokio::test]
async fn admin_satisfies_moderator_permission() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .roles(&["admin", "user"])
        .build()
        .await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let returned_user = auth_guard.require(&[Permission::Moderator]).await?;

    assert_eq!(returned_user.id, user.id);

    Ok(())
}

/// Tests plain user is denied the moderator permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_moderator_permission_to_plain_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::Moderator]).await;

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(user_id, message)) => {
            assert_eq!(user_id, user.id);
            assert!(message.contains("moderator"));
        }
        e => panic!("Expected AccessDenied error, got: {:?}", e),
    }

    Ok(())
}
