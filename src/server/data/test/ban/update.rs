use super::*;

/// Tests only provided fields change; everything else is untouched.
#[tokio::test]
async fn merges_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ban)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ban = factory::ban::BanFactory::new(db)
        .player_name("Original")
        .build()
        .await?;

    let repo = BanRepository::new(db);
    let updated = repo
        .update(
            ban.id,
            UpdateBanParam {
                status: Some(BanStatus::Revoked),
                notes: Some("Appeal approved".to_string()),
                ..Default::default()
            },
        )
        .await?
        .expect("ban exists");

    assert_eq!(updated.status, "revoked");
    assert_eq!(updated.notes.as_deref(), Some("Appeal approved"));
    assert_eq!(updated.player_name, "Original");
    assert_eq!(updated.steam_id, ban.steam_id);
    assert!(updated.updated_at >= ban.updated_at);

    Ok(())
}

/// Tests updating a missing id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_ban() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ban)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BanRepository::new(db);
    let updated = repo.update(999, UpdateBanParam::default()).await?;

    assert!(updated.is_none());

    Ok(())
}

/// Tests changing the duration type is a plain merge: the stored expiration
/// is not recomputed or cleared.
#[tokio::test]
async fn does_not_recompute_expiry_on_duration_change() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ban)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ban = factory::ban::BanFactory::new(db).build().await?;
    assert!(ban.expires_at.is_some());

    let repo = BanRepository::new(db);
    let updated = repo
        .update(
            ban.id,
            UpdateBanParam {
                duration_type: Some(BanDurationType::Permanent),
                ..Default::default()
            },
        )
        .await?
        .expect("ban exists");

    assert_eq!(updated.duration_type, "permanent");
    assert_eq!(updated.expires_at, ban.expires_at);

    Ok(())
}
