use super::*;

/// Tests an active temporary ban with a future expiration is in effect.
///
/// Expected: Ok(Some(Model))
#[tokio::test]
async fn finds_active_temporary_ban() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ban)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ban = factory::ban::BanFactory::new(db)
        .steam_id("STEAM_0:1:100")
        .build()
        .await?;

    let repo = BanRepository::new(db);
    let found = repo.find_active_by_steam_id("STEAM_0:1:100", Utc::now()).await?;

    assert_eq!(found.map(|b| b.id), Some(ban.id));

    Ok(())
}

/// Tests an active permanent ban is in effect despite having no expiration.
#[tokio::test]
async fn finds_permanent_ban() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ban)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ban = factory::ban::BanFactory::new(db)
        .steam_id("STEAM_0:1:200")
        .permanent()
        .build()
        .await?;

    let repo = BanRepository::new(db);
    let found = repo.find_active_by_steam_id("STEAM_0:1:200", Utc::now()).await?;

    assert_eq!(found.map(|b| b.id), Some(ban.id));

    Ok(())
}

/// Tests a temporary ban whose expiration has passed is not in effect even
/// though its stored status is still `active`.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_overdue_temporary_ban() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ban)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::ban::BanFactory::new(db)
        .steam_id("STEAM_0:1:300")
        .temporary_expired()
        .build()
        .await?;

    let repo = BanRepository::new(db);
    let found = repo.find_active_by_steam_id("STEAM_0:1:300", Utc::now()).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests revoked and expired bans are never in effect, whatever their
/// expiration says.
#[tokio::test]
async fn ignores_non_active_statuses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ban)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::ban::BanFactory::new(db)
        .steam_id("STEAM_0:1:400")
        .status("revoked")
        .build()
        .await?;
    factory::ban::BanFactory::new(db)
        .steam_id("STEAM_0:1:400")
        .status("expired")
        .build()
        .await?;

    let repo = BanRepository::new(db);
    let found = repo.find_active_by_steam_id("STEAM_0:1:400", Utc::now()).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests the lookup only matches the exact identifier.
#[tokio::test]
async fn ignores_other_steam_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ban)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::ban::BanFactory::new(db)
        .steam_id("STEAM_0:1:500")
        .build()
        .await?;

    let repo = BanRepository::new(db);
    let found = repo.find_active_by_steam_id("STEAM_0:1:501", Utc::now()).await?;

    assert!(found.is_none());

    Ok(())
}
