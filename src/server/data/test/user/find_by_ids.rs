use super::*;

/// Tests the batch lookup returns only the requested users and silently
/// skips ids that do not exist.
#[tokio::test]
async fn returns_matches_and_skips_missing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;
    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let users = repo.find_by_ids(&[first.id, second.id, 9999]).await?;

    assert_eq!(users.len(), 2);
    assert!(users.iter().any(|u| u.id == first.id));
    assert!(users.iter().any(|u| u.id == second.id));

    Ok(())
}

/// Tests empty input short-circuits to an empty result.
#[tokio::test]
async fn empty_input_returns_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let users = repo.find_by_ids(&[]).await?;

    assert!(users.is_empty());

    Ok(())
}
