//! Appeal domain model and parameter types.

use chrono::{DateTime, Utc};

use crate::model::appeal::AppealDto;
use crate::model::ban::BanRefDto;
use crate::model::user::UserSummaryDto;
use crate::server::error::AppError;
use crate::server::model::page::{SortDir, DEFAULT_LIMIT, DEFAULT_PAGE};

/// Review status of an appeal. Starts `pending`, moves once to a terminal
/// state. The data layer does not structurally prevent further updates;
/// the single-transition rule is enforced at the review boundary only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppealStatus {
    Pending,
    Approved,
    Rejected,
}

impl AppealStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppealStatus::Pending => "pending",
            AppealStatus::Approved => "approved",
            AppealStatus::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(AppealStatus::Pending),
            "approved" => Some(AppealStatus::Approved),
            "rejected" => Some(AppealStatus::Rejected),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, AppealStatus::Approved | AppealStatus::Rejected)
    }
}

/// Appeal submitted against a ban.
#[derive(Debug, Clone, PartialEq)]
pub struct Appeal {
    pub id: i32,
    pub ban_id: i32,
    pub reason: String,
    pub evidence: String,
    pub status: AppealStatus,
    pub submitted_by: i32,
    /// Reviewing moderator, only meaningful once status is terminal.
    pub reviewed_by: Option<i32>,
    pub review_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Appeal {
    /// Converts an entity model to a domain model.
    ///
    /// # Returns
    /// - `Ok(Appeal)` - The converted appeal
    /// - `Err(AppError::InternalError)` - Stored status does not parse
    pub fn from_entity(entity: entity::appeal::Model) -> Result<Self, AppError> {
        let status = AppealStatus::parse(&entity.status).ok_or_else(|| {
            AppError::InternalError(format!(
                "Unknown appeal status '{}' for appeal {}",
                entity.status, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            ban_id: entity.ban_id,
            reason: entity.reason,
            evidence: entity.evidence,
            status,
            submitted_by: entity.submitted_by,
            reviewed_by: entity.reviewed_by,
            review_notes: entity.review_notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Converts to the API shape with references already resolved by the
    /// query layer. A dangling ban reference becomes `None` rather than an
    /// error.
    pub fn into_dto(
        self,
        ban: Option<BanRefDto>,
        submitted_by: Option<UserSummaryDto>,
        reviewed_by: Option<UserSummaryDto>,
    ) -> AppealDto {
        AppealDto {
            id: self.id,
            ban_id: self.ban_id,
            ban,
            reason: self.reason,
            evidence: self.evidence,
            status: self.status.as_str().to_string(),
            submitted_by,
            reviewed_by,
            review_notes: self.review_notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for submitting an appeal.
///
/// Status is not a parameter: every appeal starts `pending`. The referenced
/// ban is not checked for existence or active status here; callers that care
/// perform that check themselves.
#[derive(Debug, Clone)]
pub struct CreateAppealParam {
    pub ban_id: i32,
    pub reason: String,
    pub evidence: String,
}

/// Partial-field merge for an appeal update.
///
/// This is a pure merge: setting a terminal status does not stamp
/// `reviewed_by` automatically, the boundary supplies it alongside.
#[derive(Debug, Clone, Default)]
pub struct UpdateAppealParam {
    pub reason: Option<String>,
    pub evidence: Option<String>,
    pub status: Option<AppealStatus>,
    pub reviewed_by: Option<i32>,
    pub review_notes: Option<String>,
}

/// Filter and pagination inputs for the appeal listing.
#[derive(Debug, Clone)]
pub struct AppealFilterParam {
    pub status: Option<AppealStatus>,
    pub ban_id: Option<i32>,
    pub search: Option<String>,
    /// 1-indexed page number.
    pub page: u64,
    pub limit: u64,
    /// Sort column name; unknown names fall back to `created_at`.
    pub sort_by: String,
    pub sort_dir: SortDir,
}

impl Default for AppealFilterParam {
    fn default() -> Self {
        Self {
            status: None,
            ban_id: None,
            search: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            sort_by: "created_at".to_string(),
            sort_dir: SortDir::Desc,
        }
    }
}
