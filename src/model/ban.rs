use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{appeal::AppealDto, user::UserSummaryDto};

/// Ban as returned by the API, with the issuing user resolved to a
/// username-only summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BanDto {
    pub id: i32,
    pub player_name: String,
    pub steam_id: String,
    pub discord_id: Option<String>,
    pub ip_address: Option<String>,
    pub reason: String,
    pub evidence: String,
    pub evidence_urls: Vec<String>,
    pub duration_type: String,
    pub duration_days: Option<i32>,
    pub expires_at: Option<DateTime<Utc>>,
    pub status: String,
    /// Issuing admin; `None` only if the user record has been removed.
    pub issued_by: Option<UserSummaryDto>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Ban detail view: the ban plus its appeals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BanDetailsDto {
    #[serde(flatten)]
    pub ban: BanDto,
    pub appeals: Vec<AppealDto>,
}

/// Short ban reference embedded into appeal responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BanRefDto {
    pub id: i32,
    pub player_name: String,
    pub steam_id: String,
    pub status: String,
}

/// Request body for issuing a ban. There is no status field: every ban
/// starts `active`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBanDto {
    pub player_name: String,
    pub steam_id: String,
    pub discord_id: Option<String>,
    pub ip_address: Option<String>,
    pub reason: String,
    pub evidence: String,
    #[serde(default)]
    pub evidence_urls: Vec<String>,
    pub duration_type: String,
    pub duration_days: Option<u32>,
    pub notes: Option<String>,
}

/// Request body for a partial ban update. Absent fields stay untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBanDto {
    pub player_name: Option<String>,
    pub steam_id: Option<String>,
    pub discord_id: Option<String>,
    pub ip_address: Option<String>,
    pub reason: Option<String>,
    pub evidence: Option<String>,
    pub evidence_urls: Option<Vec<String>>,
    pub duration_type: Option<String>,
    pub duration_days: Option<i32>,
    pub expires_at: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// Paginated ban listing envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedBansDto {
    pub items: Vec<BanDto>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}
