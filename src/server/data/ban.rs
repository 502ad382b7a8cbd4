//! Ban data repository for database operations.
//!
//! Provides the `BanRepository` for creating, querying, updating, and
//! deleting ban records, plus the active-ban lookup used by the appeal flow
//! and the overdue-ban sweep used by the expiry scheduler.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    Order, QueryFilter, QueryOrder,
};

use crate::server::model::ban::{
    BanDurationType, BanFilterParam, BanStatus, CreateBanParam, UpdateBanParam,
};
use crate::server::model::page::SortDir;

pub struct BanRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BanRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new ban.
    ///
    /// Status is always `active`; there is no way for a caller to supply a
    /// different initial status. The expiration timestamp is computed by the
    /// service and passed in, already consistent with the duration type.
    ///
    /// # Arguments
    /// - `param` - Ban fields from the creation request
    /// - `issuer_id` - Id of the admin issuing the ban
    /// - `expires_at` - Precomputed expiration, `None` for permanent bans
    ///
    /// # Returns
    /// - `Ok(Model)` - The created ban
    /// - `Err(DbErr)` - Database error
    pub async fn create(
        &self,
        param: CreateBanParam,
        issuer_id: i32,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<entity::ban::Model, DbErr> {
        let evidence_urls = if param.evidence_urls.is_empty() {
            None
        } else {
            Some(
                serde_json::to_string(&param.evidence_urls)
                    .map_err(|e| DbErr::Custom(e.to_string()))?,
            )
        };

        let now = Utc::now();

        entity::ban::ActiveModel {
            player_name: ActiveValue::Set(param.player_name),
            steam_id: ActiveValue::Set(param.steam_id),
            discord_id: ActiveValue::Set(param.discord_id),
            ip_address: ActiveValue::Set(param.ip_address),
            reason: ActiveValue::Set(param.reason),
            evidence: ActiveValue::Set(param.evidence),
            evidence_urls: ActiveValue::Set(evidence_urls),
            duration_type: ActiveValue::Set(param.duration_type.as_str().to_string()),
            duration_days: ActiveValue::Set(
                param
                    .duration_days
                    .map(i32::try_from)
                    .transpose()
                    .map_err(|e| DbErr::Custom(e.to_string()))?,
            ),
            expires_at: ActiveValue::Set(expires_at),
            status: ActiveValue::Set(BanStatus::Active.as_str().to_string()),
            issued_by: ActiveValue::Set(issuer_id),
            notes: ActiveValue::Set(param.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a ban by id.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Ban found
    /// - `Ok(None)` - No ban with that id
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::ban::Model>, DbErr> {
        entity::prelude::Ban::find_by_id(id).one(self.db).await
    }

    /// Batch-fetches bans by id for reference resolution in appeal listings.
    ///
    /// Ids pointing at deleted bans are simply absent from the result; the
    /// caller renders those references as missing.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::ban::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Ban::find()
            .filter(entity::ban::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Looks up the ban currently in effect for a platform identifier.
    ///
    /// Matches status `active` AND (expiration in the future OR permanent).
    /// When several records qualify the store's first-match order decides;
    /// no explicit ordering is applied.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - A ban is in effect for this identifier
    /// - `Ok(None)` - No ban in effect (not an error)
    /// - `Err(DbErr)` - Database error
    pub async fn find_active_by_steam_id(
        &self,
        steam_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<entity::ban::Model>, DbErr> {
        entity::prelude::Ban::find()
            .filter(entity::ban::Column::SteamId.eq(steam_id))
            .filter(entity::ban::Column::Status.eq(BanStatus::Active.as_str()))
            .filter(
                Condition::any()
                    .add(entity::ban::Column::ExpiresAt.gt(now))
                    .add(
                        entity::ban::Column::DurationType
                            .eq(BanDurationType::Permanent.as_str()),
                    ),
            )
            .one(self.db)
            .await
    }

    /// Lists bans matching the filter, paginated.
    ///
    /// Equality filters (status, steam id) and the free-text search over
    /// player name / steam id combine with AND; omitted filters add no
    /// predicate. Total is counted before pagination.
    ///
    /// # Returns
    /// - `Ok((bans, total))` - Page items and total match count
    /// - `Err(DbErr)` - Database error
    pub async fn list(
        &self,
        filter: &BanFilterParam,
    ) -> Result<(Vec<entity::ban::Model>, u64), DbErr> {
        let mut query = entity::prelude::Ban::find();

        if let Some(status) = filter.status {
            query = query.filter(entity::ban::Column::Status.eq(status.as_str()));
        }
        if let Some(steam_id) = &filter.steam_id {
            query = query.filter(entity::ban::Column::SteamId.eq(steam_id.as_str()));
        }
        if let Some(search) = &filter.search {
            query = query.filter(
                Condition::any()
                    .add(entity::ban::Column::PlayerName.contains(search))
                    .add(entity::ban::Column::SteamId.contains(search)),
            );
        }

        let order = match filter.sort_dir {
            SortDir::Asc => Order::Asc,
            SortDir::Desc => Order::Desc,
        };
        let sort_column = match filter.sort_by.as_str() {
            "updated_at" => entity::ban::Column::UpdatedAt,
            "player_name" => entity::ban::Column::PlayerName,
            "expires_at" => entity::ban::Column::ExpiresAt,
            _ => entity::ban::Column::CreatedAt,
        };
        query = query.order_by(sort_column, order);

        super::paginate(query, self.db, filter.page, filter.limit).await
    }

    /// Partial-field merge onto an existing ban.
    ///
    /// Only provided fields change; no invariant re-validation happens here
    /// (changing the duration type does not recompute `expires_at`).
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated ban
    /// - `Ok(None)` - No ban with that id
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        id: i32,
        param: UpdateBanParam,
    ) -> Result<Option<entity::ban::Model>, DbErr> {
        let Some(ban) = entity::prelude::Ban::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::ban::ActiveModel = ban.into();

        if let Some(player_name) = param.player_name {
            active_model.player_name = ActiveValue::Set(player_name);
        }
        if let Some(steam_id) = param.steam_id {
            active_model.steam_id = ActiveValue::Set(steam_id);
        }
        if let Some(discord_id) = param.discord_id {
            active_model.discord_id = ActiveValue::Set(Some(discord_id));
        }
        if let Some(ip_address) = param.ip_address {
            active_model.ip_address = ActiveValue::Set(Some(ip_address));
        }
        if let Some(reason) = param.reason {
            active_model.reason = ActiveValue::Set(reason);
        }
        if let Some(evidence) = param.evidence {
            active_model.evidence = ActiveValue::Set(evidence);
        }
        if let Some(evidence_urls) = param.evidence_urls {
            let value = if evidence_urls.is_empty() {
                None
            } else {
                Some(
                    serde_json::to_string(&evidence_urls)
                        .map_err(|e| DbErr::Custom(e.to_string()))?,
                )
            };
            active_model.evidence_urls = ActiveValue::Set(value);
        }
        if let Some(duration_type) = param.duration_type {
            active_model.duration_type = ActiveValue::Set(duration_type.as_str().to_string());
        }
        if let Some(duration_days) = param.duration_days {
            active_model.duration_days = ActiveValue::Set(Some(duration_days));
        }
        if let Some(expires_at) = param.expires_at {
            active_model.expires_at = ActiveValue::Set(Some(expires_at));
        }
        if let Some(status) = param.status {
            active_model.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(notes) = param.notes {
            active_model.notes = ActiveValue::Set(Some(notes));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        Ok(Some(updated))
    }

    /// Deletes a ban by id. Appeals referencing it are left untouched.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of rows removed (0 when the id did not exist)
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Ban::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Marks overdue temporary bans as expired.
    ///
    /// Flips every `active` temporary ban whose expiration has passed to
    /// `expired` in one statement. Called by the expiry scheduler; read
    /// paths never rely on this having run.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of bans transitioned
    /// - `Err(DbErr)` - Database error
    pub async fn expire_overdue(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::Ban::update_many()
            .filter(entity::ban::Column::Status.eq(BanStatus::Active.as_str()))
            .filter(
                entity::ban::Column::DurationType.eq(BanDurationType::Temporary.as_str()),
            )
            .filter(entity::ban::Column::ExpiresAt.lte(now))
            .col_expr(
                entity::ban::Column::Status,
                sea_orm::sea_query::Expr::value(BanStatus::Expired.as_str()),
            )
            .col_expr(
                entity::ban::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(now),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
