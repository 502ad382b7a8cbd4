//! User data repository for database operations.
//!
//! Handles the sync-on-login upsert keyed by the identity provider's subject
//! id, plus the id lookups the ban/appeal query layer uses to resolve user
//! references into embedded summaries.

use std::collections::HashSet;

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::model::user::{roles_to_json, Role, UpsertUserParam};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a user from identity-provider data.
    ///
    /// Inserts a new user or refreshes an existing user's name and email,
    /// keyed by `external_id`. Roles are only written when the param carries
    /// `Some` roles; a regular login therefore never changes a user's role
    /// set. New users without explicit roles start with just `user`.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created or updated user
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<entity::user::Model, DbErr> {
        let mut update_columns = vec![
            entity::user::Column::Name,
            entity::user::Column::Email,
            entity::user::Column::UpdatedAt,
        ];

        if param.roles.is_some() {
            update_columns.push(entity::user::Column::Roles);
        }

        let roles = param
            .roles
            .unwrap_or_else(|| HashSet::from([Role::User]));
        let now = Utc::now();

        entity::prelude::User::insert(entity::user::ActiveModel {
            external_id: ActiveValue::Set(param.external_id),
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            roles: ActiveValue::Set(roles_to_json(&roles)),
            deleted: ActiveValue::Set(false),
            banned: ActiveValue::Set(false),
            ban_reason: ActiveValue::Set(None),
            post_count: ActiveValue::Set(0),
            comment_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::ExternalId)
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    /// Gets a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Batch-fetches users by id for reference resolution.
    ///
    /// The query layer collects the user ids referenced by a page of bans or
    /// appeals and resolves them in one query instead of per-row lookups.
    /// Missing ids are simply absent from the result.
    ///
    /// # Returns
    /// - `Ok(users)` - All users whose id appears in `ids`
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::user::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Checks whether any admin user exists.
    ///
    /// Used on login to decide whether the first-time admin bootstrap
    /// applies. Matches on the JSON roles column containing the admin role
    /// name.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin exists
    /// - `Ok(false)` - No admin yet (first-time setup)
    /// - `Err(DbErr)` - Database error
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        use sea_orm::PaginatorTrait;

        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Roles.contains("\"admin\""))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
