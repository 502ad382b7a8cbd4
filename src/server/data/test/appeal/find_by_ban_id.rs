use super::*;

/// Tests only appeals for the requested ban come back, newest first.
#[tokio::test]
async fn returns_appeals_for_ban_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Appeal)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::appeal::create_appeal(db, 1, 10).await?;
    let second = factory::appeal::create_appeal(db, 1, 11).await?;
    factory::appeal::create_appeal(db, 2, 12).await?;

    let repo = AppealRepository::new(db);
    let appeals = repo.find_by_ban_id(1).await?;

    assert_eq!(appeals.len(), 2);
    let ids: Vec<i32> = appeals.iter().map(|a| a.id).collect();
    assert!(ids.contains(&first.id));
    assert!(ids.contains(&second.id));

    Ok(())
}

/// Tests a ban with no appeals yields an empty list.
#[tokio::test]
async fn returns_empty_for_unappealed_ban() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Appeal)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AppealRepository::new(db);
    let appeals = repo.find_by_ban_id(1).await?;

    assert!(appeals.is_empty());

    Ok(())
}
