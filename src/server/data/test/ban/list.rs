use super::*;

/// Tests the status filter only returns matching bans.
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ban)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::ban::BanFactory::new(db).build().await?;
    factory::ban::BanFactory::new(db).status("revoked").build().await?;
    factory::ban::BanFactory::new(db).status("expired").build().await?;

    let repo = BanRepository::new(db);
    let (items, total) = repo
        .list(&BanFilterParam {
            status: Some(BanStatus::Revoked),
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].status, "revoked");

    Ok(())
}

/// Tests the steam id equality filter.
#[tokio::test]
async fn filters_by_steam_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ban)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::ban::BanFactory::new(db).steam_id("STEAM_0:1:7").build().await?;
    factory::ban::BanFactory::new(db).steam_id("STEAM_0:1:8").build().await?;

    let repo = BanRepository::new(db);
    let (items, total) = repo
        .list(&BanFilterParam {
            steam_id: Some("STEAM_0:1:7".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(items[0].steam_id, "STEAM_0:1:7");

    Ok(())
}

/// Tests the free-text search matches player name or steam id and combines
/// with the status filter by AND.
#[tokio::test]
async fn search_matches_name_or_steam_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ban)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::ban::BanFactory::new(db)
        .player_name("GrieferMcGee")
        .steam_id("STEAM_0:1:10")
        .build()
        .await?;
    factory::ban::BanFactory::new(db)
        .player_name("Innocent")
        .steam_id("STEAM_0:1:Griefer")
        .status("revoked")
        .build()
        .await?;
    factory::ban::BanFactory::new(db)
        .player_name("Bystander")
        .steam_id("STEAM_0:1:11")
        .build()
        .await?;

    let repo = BanRepository::new(db);

    let (_, total) = repo
        .list(&BanFilterParam {
            search: Some("Griefer".to_string()),
            ..Default::default()
        })
        .await?;
    assert_eq!(total, 2);

    let (items, total) = repo
        .list(&BanFilterParam {
            status: Some(BanStatus::Active),
            search: Some("Griefer".to_string()),
            ..Default::default()
        })
        .await?;
    assert_eq!(total, 1);
    assert_eq!(items[0].player_name, "GrieferMcGee");

    Ok(())
}

/// Tests pagination slices with an exact total: 25 records, limit 10,
/// page 2 returns 10 items and total 25.
#[tokio::test]
async fn paginates_with_exact_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ban)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..25 {
        factory::ban::BanFactory::new(db).build().await?;
    }

    let repo = BanRepository::new(db);
    let (items, total) = repo
        .list(&BanFilterParam {
            page: 2,
            limit: 10,
            ..Default::default()
        })
        .await?;

    assert_eq!(items.len(), 10);
    assert_eq!(total, 25);

    Ok(())
}

/// Tests an out-of-range page returns no items but keeps the real total.
#[tokio::test]
async fn out_of_range_page_returns_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ban)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::ban::BanFactory::new(db).build().await?;
    }

    let repo = BanRepository::new(db);
    let (items, total) = repo
        .list(&BanFilterParam {
            page: 5,
            limit: 10,
            ..Default::default()
        })
        .await?;

    assert!(items.is_empty());
    assert_eq!(total, 3);

    Ok(())
}

/// Tests sorting by player name ascending; unknown sort columns fall back
/// to created_at.
#[tokio::test]
async fn sorts_by_requested_column() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ban)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::ban::BanFactory::new(db).player_name("Charlie").build().await?;
    factory::ban::BanFactory::new(db).player_name("Alice").build().await?;
    factory::ban::BanFactory::new(db).player_name("Bob").build().await?;

    let repo = BanRepository::new(db);
    let (items, _) = repo
        .list(&BanFilterParam {
            sort_by: "player_name".to_string(),
            sort_dir: SortDir::Asc,
            ..Default::default()
        })
        .await?;

    let names: Vec<&str> = items.iter().map(|b| b.player_name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Charlie"]);

    Ok(())
}
