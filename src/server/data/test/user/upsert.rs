use super::*;

/// Tests a first-time login inserts a user with the default role set.
#[tokio::test]
async fn inserts_new_user_with_default_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.upsert(upsert_param("subject-a")).await?;

    assert_eq!(user.external_id, "subject-a");
    assert_eq!(user.roles, r#"["user"]"#);

    Ok(())
}

/// Tests a repeat login refreshes name and email but keeps the id and the
/// existing role set.
#[tokio::test]
async fn repeat_login_updates_profile_preserving_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .external_id("subject-a")
        .roles(&["admin", "moderator", "user"])
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let mut param = upsert_param("subject-a");
    param.name = "Renamed".to_string();
    param.email = "renamed@example.com".to_string();
    let user = repo.upsert(param).await?;

    assert_eq!(user.id, existing.id);
    assert_eq!(user.name, "Renamed");
    assert_eq!(user.email, "renamed@example.com");
    assert_eq!(user.roles, r#"["admin","moderator","user"]"#);

    Ok(())
}

/// Tests an upsert carrying explicit roles replaces the stored role set.
#[tokio::test]
async fn explicit_roles_replace_existing_set() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .external_id("subject-a")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let mut param = upsert_param("subject-a");
    param.roles = Some(HashSet::from([Role::Admin, Role::Moderator, Role::User]));
    let user = repo.upsert(param).await?;

    assert_eq!(user.roles, r#"["admin","moderator","user"]"#);

    Ok(())
}
