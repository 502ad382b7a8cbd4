use super::*;

/// Tests the sweep flips only overdue active temporary bans.
///
/// Permanent bans, future temporary bans, and bans already in a terminal
/// status are left alone.
#[tokio::test]
async fn flips_only_overdue_active_temporary_bans() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ban)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let overdue = factory::ban::BanFactory::new(db).temporary_expired().build().await?;
    let future = factory::ban::BanFactory::new(db).build().await?;
    let permanent = factory::ban::BanFactory::new(db).permanent().build().await?;
    let revoked = factory::ban::BanFactory::new(db)
        .temporary_expired()
        .status("revoked")
        .build()
        .await?;

    let repo = BanRepository::new(db);
    let flipped = repo.expire_overdue(Utc::now()).await?;
    assert_eq!(flipped, 1);

    assert_eq!(
        repo.find_by_id(overdue.id).await?.map(|b| b.status),
        Some("expired".to_string())
    );
    assert_eq!(
        repo.find_by_id(future.id).await?.map(|b| b.status),
        Some("active".to_string())
    );
    assert_eq!(
        repo.find_by_id(permanent.id).await?.map(|b| b.status),
        Some("active".to_string())
    );
    assert_eq!(
        repo.find_by_id(revoked.id).await?.map(|b| b.status),
        Some("revoked".to_string())
    );

    Ok(())
}

/// Tests a second sweep finds nothing to do.
#[tokio::test]
async fn is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ban)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::ban::BanFactory::new(db).temporary_expired().build().await?;

    let repo = BanRepository::new(db);
    assert_eq!(repo.expire_overdue(Utc::now()).await?, 1);
    assert_eq!(repo.expire_overdue(Utc::now()).await?, 0);

    Ok(())
}
