use super::*;

mod require_admin;
mod require_moderator;

/// Tests empty permission list grants access to any logged-in user.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
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
    let result = auth_guard.require(&[]).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, user.id);

    Ok(())
}

/// Tests unauthenticated request is denied.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn denies_access_when_not_authenticated() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::UserNotInSession) => {}
        e => panic!("Expected UserNotInSession error, got: {:?}", e),
    }

    Ok(())
}

/// Tests a session pointing at a deleted user is denied.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn denies_access_when_user_not_in_database() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(999).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::UserNotInDatabase(user_id)) => {
            assert_eq!(user_id, 999);
        }
        e => panic!("Expected UserNotInDatabase error, got: {:?}", e),
    }

    Ok(())
}
