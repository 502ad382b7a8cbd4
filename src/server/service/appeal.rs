//! Appeal lifecycle logic.
//!
//! Submission forces status `pending`; review stamps the reviewing
//! moderator at the boundary and flows through the same partial merge as
//! any other update. Listings resolve ban references and user summaries
//! with one batch query each per page; a reference to a deleted ban
//! renders as missing rather than failing the request.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        appeal::{AppealDto, PaginatedAppealsDto},
        ban::BanRefDto,
        user::UserSummaryDto,
    },
    server::{
        data::{appeal::AppealRepository, ban::BanRepository, user::UserRepository},
        error::AppError,
        model::{
            appeal::{Appeal, AppealFilterParam, CreateAppealParam, UpdateAppealParam},
            ban::Ban,
        },
    },
};

pub struct AppealService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppealService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits an appeal against a ban.
    ///
    /// Status is forced to `pending`. The referenced ban is not required to
    /// exist or be active; an appeal against a since-deleted ban is stored
    /// and rendered with a missing ban reference.
    ///
    /// # Returns
    /// - `Ok(AppealDto)` - The created appeal with references resolved
    /// - `Err(AppError)` - Database error
    pub async fn create(
        &self,
        param: CreateAppealParam,
        submitter_id: i32,
    ) -> Result<AppealDto, AppError> {
        let appeal_repo = AppealRepository::new(self.db);
        let entity = appeal_repo.create(param, submitter_id).await?;
        let appeal = Appeal::from_entity(entity)?;

        self.resolve_one(appeal).await
    }

    /// Gets an appeal by id with references resolved.
    ///
    /// # Returns
    /// - `Ok(AppealDto)` - The appeal
    /// - `Err(AppError::NotFound)` - No appeal with that id
    pub async fn get(&self, id: i32) -> Result<AppealDto, AppError> {
        let appeal_repo = AppealRepository::new(self.db);
        let entity = appeal_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Appeal not found".to_string()))?;
        let appeal = Appeal::from_entity(entity)?;

        self.resolve_one(appeal).await
    }

    /// Lists appeals matching the filter with references resolved.
    ///
    /// # Returns
    /// - `Ok(PaginatedAppealsDto)` - `{items, total, page, limit}` envelope
    /// - `Err(AppError)` - Database error
    pub async fn list(
        &self,
        filter: AppealFilterParam,
    ) -> Result<PaginatedAppealsDto, AppError> {
        let appeal_repo = AppealRepository::new(self.db);
        let (entities, total) = appeal_repo.list(&filter).await?;

        let appeals = entities
            .into_iter()
            .map(Appeal::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        let mut ban_ids = Vec::new();
        let mut user_ids = Vec::new();
        for appeal in &appeals {
            ban_ids.push(appeal.ban_id);
            user_ids.push(appeal.submitted_by);
            if let Some(reviewer) = appeal.reviewed_by {
                user_ids.push(reviewer);
            }
        }

        let bans = self.ban_refs(&ban_ids).await?;
        let users = self.user_summaries(&user_ids).await?;

        let items = appeals
            .into_iter()
            .map(|appeal| {
                let ban = bans.get(&appeal.ban_id).cloned();
                let submitted_by = users.get(&appeal.submitted_by).cloned();
                let reviewed_by = appeal.reviewed_by.and_then(|id| users.get(&id).cloned());
                appeal.into_dto(ban, submitted_by, reviewed_by)
            })
            .collect();

        Ok(PaginatedAppealsDto {
            items,
            total,
            page: filter.page,
            limit: filter.limit,
        })
    }

    /// Partial-field merge onto an existing appeal.
    ///
    /// The reviewer id in the param was stamped by the boundary when the
    /// update sets a terminal status; this method performs no review logic
    /// of its own.
    ///
    /// # Returns
    /// - `Ok(AppealDto)` - The updated appeal
    /// - `Err(AppError::NotFound)` - No appeal with that id
    pub async fn update(&self, id: i32, param: UpdateAppealParam) -> Result<AppealDto, AppError> {
        let appeal_repo = AppealRepository::new(self.db);
        let entity = appeal_repo
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Appeal not found".to_string()))?;
        let appeal = Appeal::from_entity(entity)?;

        self.resolve_one(appeal).await
    }

    /// Deletes an appeal.
    ///
    /// # Returns
    /// - `Ok(())` - Appeal removed
    /// - `Err(AppError::NotFound)` - No appeal with that id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let appeal_repo = AppealRepository::new(self.db);
        let removed = appeal_repo.delete(id).await?;

        if removed == 0 {
            return Err(AppError::NotFound("Appeal not found".to_string()));
        }

        Ok(())
    }

    async fn resolve_one(&self, appeal: Appeal) -> Result<AppealDto, AppError> {
        let bans = self.ban_refs(&[appeal.ban_id]).await?;
        let mut user_ids = vec![appeal.submitted_by];
        if let Some(reviewer) = appeal.reviewed_by {
            user_ids.push(reviewer);
        }
        let users = self.user_summaries(&user_ids).await?;

        let ban = bans.get(&appeal.ban_id).cloned();
        let submitted_by = users.get(&appeal.submitted_by).cloned();
        let reviewed_by = appeal.reviewed_by.and_then(|id| users.get(&id).cloned());

        Ok(appeal.into_dto(ban, submitted_by, reviewed_by))
    }

    async fn ban_refs(&self, ids: &[i32]) -> Result<HashMap<i32, BanRefDto>, AppError> {
        let ban_repo = BanRepository::new(self.db);
        let entities = ban_repo.find_by_ids(ids).await?;

        let mut refs = HashMap::new();
        for entity in entities {
            let ban = Ban::from_entity(entity)?;
            refs.insert(ban.id, ban.to_ref_dto());
        }

        Ok(refs)
    }

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
