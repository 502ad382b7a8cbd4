use super::*;

/// Tests deleting an existing ban reports one removed row, and deleting it
/// again reports zero.
#[tokio::test]
async fn reports_removed_row_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ban)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ban = factory::ban::create_ban(db, 1).await?;

    let repo = BanRepository::new(db);
    assert_eq!(repo.delete(ban.id).await?, 1);
    assert_eq!(repo.delete(ban.id).await?, 0);
    assert!(repo.find_by_id(ban.id).await?.is_none());

    Ok(())
}

/// Tests deleting a ban leaves its appeals in place.
#[tokio::test]
async fn leaves_appeals_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ban)
        .with_table(entity::prelude::Appeal)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ban = factory::ban::create_ban(db, 1).await?;
    let appeal = factory::appeal::create_appeal(db, ban.id, 2).await?;

    let repo = BanRepository::new(db);
    repo.delete(ban.id).await?;

    let appeal_repo = crate::server::data::appeal::AppealRepository::new(db);
    let remaining = appeal_repo.find_by_id(appeal.id).await?;
    assert_eq!(remaining.map(|a| a.ban_id), Some(ban.id));

    Ok(())
}
