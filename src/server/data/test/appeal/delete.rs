use super::*;

/// Tests deleting an existing appeal reports one removed row, and deleting
/// it again reports zero.
#[tokio::test]
async fn reports_removed_row_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Appeal)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let appeal = factory::appeal::create_appeal(db, 1, 1).await?;

    let repo = AppealRepository::new(db);
    assert_eq!(repo.delete(appeal.id).await?, 1);
    assert_eq!(repo.delete(appeal.id).await?, 0);
    assert!(repo.find_by_id(appeal.id).await?.is_none());

    Ok(())
}
