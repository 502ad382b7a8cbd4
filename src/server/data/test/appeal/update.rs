use super::*;

/// Tests the review update merges status, reviewer, and notes while leaving
/// the submission fields untouched.
#[tokio::test]
async fn merges_review_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Appeal)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let appeal = factory::appeal::create_appeal(db, 1, 10).await?;

    let repo = AppealRepository::new(db);
    let updated = repo
        .update(
            appeal.id,
            UpdateAppealParam {
                status: Some(AppealStatus::Approved),
                reviewed_by: Some(20),
                review_notes: Some("Alibi checks out".to_string()),
                ..Default::default()
            },
        )
        .await?
        .expect("appeal exists");

    assert_eq!(updated.status, "approved");
    assert_eq!(updated.reviewed_by, Some(20));
    assert_eq!(updated.review_notes.as_deref(), Some("Alibi checks out"));
    assert_eq!(updated.reason, appeal.reason);
    assert_eq!(updated.submitted_by, 10);

    Ok(())
}

/// Tests re-applying the same terminal review leaves the record equivalent.
#[tokio::test]
async fn repeated_terminal_update_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Appeal)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let appeal = factory::appeal::create_appeal(db, 1, 10).await?;

    let repo = AppealRepository::new(db);
    let review = UpdateAppealParam {
        status: Some(AppealStatus::Approved),
        reviewed_by: Some(20),
        review_notes: Some("Alibi checks out".to_string()),
        ..Default::default()
    };

    let first = repo
        .update(appeal.id, review.clone())
        .await?
        .expect("appeal exists");
    let second = repo
        .update(appeal.id, review)
        .await?
        .expect("appeal exists");

    assert_eq!(second.status, first.status);
    assert_eq!(second.reviewed_by, first.reviewed_by);
    assert_eq!(second.review_notes, first.review_notes);
    assert_eq!(second.reason, first.reason);
    assert_eq!(second.evidence, first.evidence);
    assert_eq!(second.submitted_by, first.submitted_by);
    assert_eq!(second.created_at, first.created_at);

    Ok(())
}

/// Tests updating a missing id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_appeal() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Appeal)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AppealRepository::new(db);
    let updated = repo.update(999, UpdateAppealParam::default()).await?;

    assert!(updated.is_none());

    Ok(())
}

/// Tests the merge is not guarded: an already-reviewed appeal can still be
/// edited at this layer.
#[tokio::test]
async fn allows_updating_terminal_appeal() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Appeal)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let appeal = factory::appeal::AppealFactory::new(db, 1, 10)
        .status("rejected")
        .reviewed_by(Some(20))
        .build()
        .await?;

    let repo = AppealRepository::new(db);
    let updated = repo
        .update(
            appeal.id,
            UpdateAppealParam {
                status: Some(AppealStatus::Approved),
                reviewed_by: Some(21),
                ..Default::default()
            },
        )
        .await?
        .expect("appeal exists");

    assert_eq!(updated.status, "approved");
    assert_eq!(updated.reviewed_by, Some(21));

    Ok(())
}
