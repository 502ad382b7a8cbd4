use super::*;

/// Tests the admin probe is false on an empty table and with only
/// non-admin users present.
#[tokio::test]
async fn false_without_admin_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert!(!repo.admin_exists().await?);

    factory::user::create_user_with_roles(db, &["moderator", "user"]).await?;
    assert!(!repo.admin_exists().await?);

    Ok(())
}

/// Tests the probe turns true once any user holds the admin role.
#[tokio::test]
async fn true_once_admin_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_roles(db, &["admin", "moderator", "user"]).await?;

    let repo = UserRepository::new(db);
    assert!(repo.admin_exists().await?);

    Ok(())
}
