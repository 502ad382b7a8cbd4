//! User entity model.
//!
//! Users are upserted from the identity provider on every login, keyed by
//! `external_id`. Roles are stored as a JSON array of role names and parsed
//! into the domain `Role` set at the repository boundary.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Identity-provider subject, unique per user.
    #[sea_orm(unique)]
    pub external_id: String,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    /// JSON array of role names: "admin", "moderator", "user".
    #[sea_orm(column_type = "Text")]
    pub roles: String,
    /// Soft-delete flag, not consulted by the ban/appeal core.
    pub deleted: bool,
    /// Forum soft-ban flag, distinct from game bans.
    pub banned: bool,
    pub ban_reason: Option<String>,
    /// Vestigial forum counters, unused by the ban/appeal core.
    pub post_count: i32,
    pub comment_count: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
