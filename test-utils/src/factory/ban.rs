//! Ban factory for creating test ban entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bans with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::ban::BanFactory;
///
/// let ban = BanFactory::new(&db)
///     .steam_id("STEAM_0:1:777")
///     .issued_by(admin.id)
///     .temporary_expired()
///     .build()
///     .await?;
/// ```
pub struct BanFactory<'a> {
    db: &'a DatabaseConnection,
    player_name: String,
    steam_id: String,
    reason: String,
    evidence: String,
    duration_type: String,
    duration_days: Option<i32>,
    expires_at: Option<DateTime<Utc>>,
    status: String,
    issued_by: i32,
    notes: Option<String>,
}

impl<'a> BanFactory<'a> {
    /// Creates a new BanFactory with default values.
    ///
    /// Defaults:
    /// - player_name: `"Player {id}"` where id is auto-incremented
    /// - steam_id: `"STEAM_0:1:{id}"`
    /// - duration: temporary, 30 days, expiring 30 days from now
    /// - status: `"active"`
    /// - issued_by: `1`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            player_name: format!("Player {}", id),
            steam_id: format!("STEAM_0:1:{}", id),
            reason: "Test ban reason".to_string(),
            evidence: "Test evidence".to_string(),
            duration_type: "temporary".to_string(),
            duration_days: Some(30),
            expires_at: Some(Utc::now() + Duration::days(30)),
            status: "active".to_string(),
            issued_by: 1,
            notes: None,
        }
    }

    pub fn player_name(mut self, player_name: impl Into<String>) -> Self {
        self.player_name = player_name.into();
        self
    }

    pub fn steam_id(mut self, steam_id: impl Into<String>) -> Self {
        self.steam_id = steam_id.into();
        self
    }

    pub fn issued_by(mut self, issued_by: i32) -> Self {
        self.issued_by = issued_by;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Makes this a permanent ban with no expiration.
    pub fn permanent(mut self) -> Self {
        self.duration_type = "permanent".to_string();
        self.duration_days = None;
        self.expires_at = None;
        self
    }

    /// Makes this a temporary ban whose expiration is already in the past
    /// while its stored status is still `active`.
    pub fn temporary_expired(mut self) -> Self {
        self.duration_type = "temporary".to_string();
        self.duration_days = Some(1);
        self.expires_at = Some(Utc::now() - Duration::days(1));
        self
    }

    pub fn expires_at(mut self, expires_at: Option<DateTime<Utc>>) -> Self {
        self.expires_at = expires_at;
        self
    }

    /// Builds and inserts the ban entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::ban::Model)` - Created ban entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::ban::Model, DbErr> {
        let now = Utc::now();
        entity::ban::ActiveModel {
            player_name: ActiveValue::Set(self.player_name),
            steam_id: ActiveValue::Set(self.steam_id),
            discord_id: ActiveValue::Set(None),
            ip_address: ActiveValue::Set(None),
            reason: ActiveValue::Set(self.reason),
            evidence: ActiveValue::Set(self.evidence),
            evidence_urls: ActiveValue::Set(None),
            duration_type: ActiveValue::Set(self.duration_type),
            duration_days: ActiveValue::Set(self.duration_days),
            expires_at: ActiveValue::Set(self.expires_at),
            status: ActiveValue::Set(self.status),
            issued_by: ActiveValue::Set(self.issued_by),
            notes: ActiveValue::Set(self.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active 30-day temporary ban issued by the given user.
///
/// Shorthand for `BanFactory::new(db).issued_by(issuer_id).build().await`.
pub async fn create_ban(
    db: &DatabaseConnection,
    issuer_id: i32,
) -> Result<entity::ban::Model, DbErr> {
    BanFactory::new(db).issued_by(issuer_id).build().await
}
