use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{ban::BanRefDto, user::UserSummaryDto};

/// Appeal as returned by the API, with user references resolved to
/// username-only summaries and the ban to a short reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppealDto {
    pub id: i32,
    pub ban_id: i32,
    /// Referenced ban; `None` when the ban has since been deleted.
    pub ban: Option<BanRefDto>,
    pub reason: String,
    pub evidence: String,
    pub status: String,
    pub submitted_by: Option<UserSummaryDto>,
    pub reviewed_by: Option<UserSummaryDto>,
    pub review_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for submitting an appeal. There is no status field: every
/// appeal starts `pending`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAppealDto {
    pub ban_id: i32,
    pub reason: String,
    pub evidence: String,
}

/// Request body for reviewing or editing an appeal. When `status` is set to
/// a terminal value the server stamps the acting moderator as reviewer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAppealDto {
    pub reason: Option<String>,
    pub evidence: Option<String>,
    pub status: Option<String>,
    pub review_notes: Option<String>,
}

/// Paginated appeal listing envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedAppealsDto {
    pub items: Vec<AppealDto>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}
