//! Ban lifecycle logic.
//!
//! Create forces status `active` and derives the expiration from the
//! duration input; update is a plain partial merge with no invariant
//! re-validation; lookups and listings resolve the issuing user into a
//! username-only summary with one batch query per page.

use std::collections::HashMap;

use chrono::{DateTime, Days, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        ban::{BanDetailsDto, BanDto, PaginatedBansDto},
        user::UserSummaryDto,
    },
    server::{
        data::{appeal::AppealRepository, ban::BanRepository, user::UserRepository},
        error::AppError,
        model::{
            appeal::Appeal,
            ban::{Ban, BanDurationType, BanFilterParam, CreateBanParam, UpdateBanParam},
        },
    },
};

pub struct BanService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BanService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Issues a new ban.
    ///
    /// Status is forced to `active` regardless of anything the caller sent.
    /// For temporary bans the expiration is `now` plus the duration in
    /// calendar days; a duration the date arithmetic cannot represent is
    /// rejected, so a temporary ban is never stored without an expiration.
    /// Permanent bans never get an expiration even when a duration length
    /// was supplied. `duration_days` has already been range-checked at the
    /// boundary for temporary bans.
    ///
    /// # Returns
    /// - `Ok(BanDto)` - The created ban with the issuer summary embedded
    /// - `Err(AppError::BadRequest)` - Duration overflows the date range
    /// - `Err(AppError)` - Database error
    pub async fn create(
        &self,
        param: CreateBanParam,
        issuer_id: i32,
    ) -> Result<BanDto, AppError> {
        let expires_at = match (param.duration_type, param.duration_days) {
            (BanDurationType::Temporary, Some(days)) => Some(
                Utc::now()
                    .checked_add_days(Days::new(u64::from(days)))
                    .ok_or_else(|| {
                        AppError::BadRequest(format!(
                            "duration_days {} is out of range",
                            days
                        ))
                    })?,
            ),
            _ => None,
        };

        let ban_repo = BanRepository::new(self.db);
        let entity = ban_repo.create(param, issuer_id, expires_at).await?;
        let ban = Ban::from_entity(entity)?;

        let issuer = self.user_summaries(&[issuer_id]).await?.remove(&issuer_id);

        Ok(ban.into_dto(issuer))
    }

    /// Gets a ban with its appeals embedded.
    ///
    /// # Returns
    /// - `Ok(BanDetailsDto)` - Ban, issuer summary, and appeals
    /// - `Err(AppError::NotFound)` - No ban with that id
    pub async fn get(&self, id: i32) -> Result<BanDetailsDto, AppError> {
        let ban_repo = BanRepository::new(self.db);
        let entity = ban_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Ban not found".to_string()))?;
        let ban = Ban::from_entity(entity)?;

        let appeal_repo = AppealRepository::new(self.db);
        let appeals = appeal_repo
            .find_by_ban_id(id)
            .await?
            .into_iter()
            .map(Appeal::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        let mut user_ids = vec![ban.issued_by];
        for appeal in &appeals {
            user_ids.push(appeal.submitted_by);
            if let Some(reviewer) = appeal.reviewed_by {
                user_ids.push(reviewer);
            }
        }
        let mut users = self.user_summaries(&user_ids).await?;

        let ban_ref = ban.to_ref_dto();
        let appeal_dtos = appeals
            .into_iter()
            .map(|appeal| {
                let submitted_by = users.get(&appeal.submitted_by).cloned();
                let reviewed_by = appeal.reviewed_by.and_then(|id| users.get(&id).cloned());
                appeal.into_dto(Some(ban_ref.clone()), submitted_by, reviewed_by)
            })
            .collect();

        let issuer = users.remove(&ban.issued_by);

        Ok(BanDetailsDto {
            ban: ban.into_dto(issuer),
            appeals: appeal_dtos,
        })
    }

    /// Lists bans matching the filter with issuer summaries resolved.
    ///
    /// # Returns
    /// - `Ok(PaginatedBansDto)` - `{items, total, page, limit}` envelope
    /// - `Err(AppError)` - Database error
    pub async fn list(&self, filter: BanFilterParam) -> Result<PaginatedBansDto, AppError> {
        let ban_repo = BanRepository::new(self.db);
        let (entities, total) = ban_repo.list(&filter).await?;

        let bans = entities
            .into_iter()
            .map(Ban::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        let issuer_ids: Vec<i32> = bans.iter().map(|b| b.issued_by).collect();
        let users = self.user_summaries(&issuer_ids).await?;

        let items = bans
            .into_iter()
            .map(|ban| {
                let issuer = users.get(&ban.issued_by).cloned();
                ban.into_dto(issuer)
            })
            .collect();

        Ok(PaginatedBansDto {
            items,
            total,
            page: filter.page,
            limit: filter.limit,
        })
    }

    /// Partial-field merge onto an existing ban.
    ///
    /// # Returns
    /// - `Ok(BanDto)` - The updated ban
    /// - `Err(AppError::NotFound)` - No ban with that id
    pub async fn update(&self, id: i32, param: UpdateBanParam) -> Result<BanDto, AppError> {
        let ban_repo = BanRepository::new(self.db);
        let entity = ban_repo
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Ban not found".to_string()))?;
        let ban = Ban::from_entity(entity)?;

        let issuer = self
            .user_summaries(&[ban.issued_by])
            .await?
            .remove(&ban.issued_by);

        Ok(ban.into_dto(issuer))
    }

    /// Deletes a ban. Appeals referencing it are left dangling by design.
    ///
    /// # Returns
    /// - `Ok(())` - Ban removed
    /// - `Err(AppError::NotFound)` - No ban with that id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let ban_repo = BanRepository::new(self.db);
        let removed = ban_repo.delete(id).await?;

        if removed == 0 {
            return Err(AppError::NotFound("Ban not found".to_string()));
        }

        Ok(())
    }

    /// Looks up the ban currently in effect for a platform identifier.
    ///
    /// # Returns
    /// - `Ok(Some(BanDto))` - A ban is in effect for this identifier
    /// - `Ok(None)` - No ban in effect (not an error)
    pub async fn find_active_by_steam_id(
        &self,
        steam_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<BanDto>, AppError> {
        let ban_repo = BanRepository::new(self.db);
        let Some(entity) = ban_repo.find_active_by_steam_id(steam_id, now).await? else {
            return Ok(None);
        };
        let ban = Ban::from_entity(entity)?;

        let issuer = self
            .user_summaries(&[ban.issued_by])
            .await?
            .remove(&ban.issued_by);

        Ok(Some(ban.into_dto(issuer)))
    }

    /// Batch-resolves user ids into username-only summaries.
    async fn user_summaries(
        &self,
        ids: &[i32],
    ) -> Result<HashMap<i32, UserSummaryDto>, AppError> {
        let user_repo = UserRepository::new(self.db);
        let users = user_repo.find_by_ids(ids).await?;

        Ok(users
            .into_iter()
            .map(|u| {
                (
                    u.id,
                    UserSummaryDto {
                        id: u.id,
                        username: u.name,
                    },
                )
            })
            .collect())
    }
}
