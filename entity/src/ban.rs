//! Ban entity model.
//!
//! Player bans issued by admins. References to appeals and the issuing user
//! are resolved by id in the data layer rather than through ORM relations,
//! so this entity declares no foreign keys.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ban")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Display name of the banned player.
    pub player_name: String,
    /// Steam-style platform identifier, the primary lookup key for bans.
    pub steam_id: String,
    /// Optional chat-platform identifier.
    pub discord_id: Option<String>,
    /// Optional network address recorded at ban time.
    pub ip_address: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub reason: String,
    #[sea_orm(column_type = "Text")]
    pub evidence: String,
    /// JSON array of evidence media URLs.
    #[sea_orm(column_type = "Text", nullable)]
    pub evidence_urls: Option<String>,
    /// "temporary" or "permanent".
    pub duration_type: String,
    /// Duration input in days, only meaningful for temporary bans.
    pub duration_days: Option<i32>,
    /// Set iff duration_type is "temporary".
    pub expires_at: Option<DateTimeUtc>,
    /// "active", "expired", "appealed" or "revoked".
    pub status: String,
    /// Id of the admin who issued the ban.
    pub issued_by: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
