//! Appeal data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order,
    QueryFilter, QueryOrder,
};

use crate::server::model::appeal::{
    AppealFilterParam, AppealStatus, CreateAppealParam, UpdateAppealParam,
};
use crate::server::model::page::SortDir;

pub struct AppealRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppealRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new appeal.
    ///
    /// Status is always `pending`; callers cannot supply one. The referenced
    /// ban is deliberately not checked for existence or active status here.
    ///
    /// # Arguments
    /// - `param` - Appeal fields from the submission request
    /// - `submitter_id` - Id of the user submitting the appeal
    ///
    /// # Returns
    /// - `Ok(Model)` - The created appeal
    /// - `Err(DbErr)` - Database error
    pub async fn create(
        &self,
        param: CreateAppealParam,
        submitter_id: i32,
    ) -> Result<entity::appeal::Model, DbErr> {
        let now = Utc::now();

        entity::appeal::ActiveModel {
            ban_id: ActiveValue::Set(param.ban_id),
            reason: ActiveValue::Set(param.reason),
            evidence: ActiveValue::Set(param.evidence),
            status: ActiveValue::Set(AppealStatus::Pending.as_str().to_string()),
            submitted_by: ActiveValue::Set(submitter_id),
            reviewed_by: ActiveValue::Set(None),
            review_notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets an appeal by id.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Appeal found
    /// - `Ok(None)` - No appeal with that id
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::appeal::Model>, DbErr> {
        entity::prelude::Appeal::find_by_id(id).one(self.db).await
    }

    /// Gets all appeals against one ban, newest first.
    ///
    /// Used when embedding a ban's appeals into its detail view.
    pub async fn find_by_ban_id(
        &self,
        ban_id: i32,
    ) -> Result<Vec<entity::appeal::Model>, DbErr> {
        entity::prelude::Appeal::find()
            .filter(entity::appeal::Column::BanId.eq(ban_id))
            .order_by_desc(entity::appeal::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Lists appeals matching the filter, paginated.
    ///
    /// Equality filters (status, ban id) and the free-text search over the
    /// appeal reason combine with AND. Total is counted before pagination.
    ///
    /// # Returns
    /// - `Ok((appeals, total))` - Page items and total match count
    /// - `Err(DbErr)` - Database error
    pub async fn list(
        &self,
        filter: &AppealFilterParam,
    ) -> Result<(Vec<entity::appeal::Model>, u64), DbErr> {
        let mut query = entity::prelude::Appeal::find();

        if let Some(status) = filter.status {
            query = query.filter(entity::appeal::Column::Status.eq(status.as_str()));
        }
        if let Some(ban_id) = filter.ban_id {
            query = query.filter(entity::appeal::Column::BanId.eq(ban_id));
        }
        if let Some(search) = &filter.search {
            query = query.filter(entity::appeal::Column::Reason.contains(search));
        }

        let order = match filter.sort_dir {
            SortDir::Asc => Order::Asc,
            SortDir::Desc => Order::Desc,
        };
        let sort_column = match filter.sort_by.as_str() {
            "updated_at" => entity::appeal::Column::UpdatedAt,
            _ => entity::appeal::Column::CreatedAt,
        };
        query = query.order_by(sort_column, order);

        super::paginate(query, self.db, filter.page, filter.limit).await
    }

    /// Partial-field merge onto an existing appeal.
    ///
    /// A pure merge-and-persist: setting a terminal status does not stamp
    /// `reviewed_by` here, the boundary passes it in the same param when it
    /// performs a review. Nothing prevents a caller from mutating a terminal
    /// appeal; that rule is advisory and lives at the boundary.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated appeal
    /// - `Ok(None)` - No appeal with that id
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        id: i32,
        param: UpdateAppealParam,
    ) -> Result<Option<entity::appeal::Model>, DbErr> {
        let Some(appeal) = entity::prelude::Appeal::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::appeal::ActiveModel = appeal.into();

        if let Some(reason) = param.reason {
            active_model.reason = ActiveValue::Set(reason);
        }
        if let Some(evidence) = param.evidence {
            active_model.evidence = ActiveValue::Set(evidence);
        }
        if let Some(status) = param.status {
            active_model.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(reviewed_by) = param.reviewed_by {
            active_model.reviewed_by = ActiveValue::Set(Some(reviewed_by));
        }
        if let Some(review_notes) = param.review_notes {
            active_model.review_notes = ActiveValue::Set(Some(review_notes));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        Ok(Some(updated))
    }

    /// Deletes an appeal by id.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of rows removed (0 when the id did not exist)
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Appeal::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
