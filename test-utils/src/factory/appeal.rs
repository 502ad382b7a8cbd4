//! Appeal factory for creating test appeal entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test appeals with customizable fields.
pub struct AppealFactory<'a> {
    db: &'a DatabaseConnection,
    ban_id: i32,
    reason: String,
    evidence: String,
    status: String,
    submitted_by: i32,
    reviewed_by: Option<i32>,
    review_notes: Option<String>,
}

impl<'a> AppealFactory<'a> {
    /// Creates a new AppealFactory with default values.
    ///
    /// Defaults:
    /// - reason: `"Appeal reason {id}"` where id is auto-incremented
    /// - status: `"pending"`, with no reviewer
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `ban_id` - Ban the appeal is filed against
    /// - `submitted_by` - User submitting the appeal
    pub fn new(db: &'a DatabaseConnection, ban_id: i32, submitted_by: i32) -> Self {
        let id = next_id();
        Self {
            db,
            ban_id,
            reason: format!("Appeal reason {}", id),
            evidence: "Appeal evidence".to_string(),
            status: "pending".to_string(),
            submitted_by,
            reviewed_by: None,
            review_notes: None,
        }
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn reviewed_by(mut self, reviewed_by: Option<i32>) -> Self {
        self.reviewed_by = reviewed_by;
        self
    }

    /// Builds and inserts the appeal entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::appeal::Model)` - Created appeal entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::appeal::Model, DbErr> {
        let now = Utc::now();
        entity::appeal::ActiveModel {
            ban_id: ActiveValue::Set(self.ban_id),
            reason: ActiveValue::Set(self.reason),
            evidence: ActiveValue::Set(self.evidence),
            status: ActiveValue::Set(self.status),
            submitted_by: ActiveValue::Set(self.submitted_by),
            reviewed_by: ActiveValue::Set(self.reviewed_by),
            review_notes: ActiveValue::Set(self.review_notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending appeal with default values.
///
/// Shorthand for `AppealFactory::new(db, ban_id, submitted_by).build().await`.
pub async fn create_appeal(
    db: &DatabaseConnection,
    ban_id: i32,
    submitted_by: i32,
) -> Result<entity::appeal::Model, DbErr> {
    AppealFactory::new(db, ban_id, submitted_by).build().await
}
