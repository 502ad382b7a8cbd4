//! Ban domain model and parameter types.

use chrono::{DateTime, Utc};

use crate::model::ban::{BanDto, BanRefDto};
use crate::model::user::UserSummaryDto;
use crate::server::error::AppError;
use crate::server::model::page::{SortDir, DEFAULT_LIMIT, DEFAULT_PAGE};

/// Lifecycle status of a ban.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BanStatus {
    Active,
    Expired,
    Appealed,
    Revoked,
}

impl BanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BanStatus::Active => "active",
            BanStatus::Expired => "expired",
            BanStatus::Appealed => "appealed",
            BanStatus::Revoked => "revoked",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(BanStatus::Active),
            "expired" => Some(BanStatus::Expired),
            "appealed" => Some(BanStatus::Appealed),
            "revoked" => Some(BanStatus::Revoked),
            _ => None,
        }
    }
}

/// Whether a ban is time-limited or permanent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BanDurationType {
    Temporary,
    Permanent,
}

impl BanDurationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BanDurationType::Temporary => "temporary",
            BanDurationType::Permanent => "permanent",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "temporary" => Some(BanDurationType::Temporary),
            "permanent" => Some(BanDurationType::Permanent),
            _ => None,
        }
    }
}

/// Ban issued against a player, converted from the entity model at the
/// repository boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Ban {
    pub id: i32,
    pub player_name: String,
    pub steam_id: String,
    pub discord_id: Option<String>,
    pub ip_address: Option<String>,
    pub reason: String,
    pub evidence: String,
    pub evidence_urls: Vec<String>,
    pub duration_type: BanDurationType,
    pub duration_days: Option<i32>,
    /// Present iff `duration_type` is temporary.
    pub expires_at: Option<DateTime<Utc>>,
    pub status: BanStatus,
    pub issued_by: i32,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ban {
    /// Converts an entity model to a domain model.
    ///
    /// # Returns
    /// - `Ok(Ban)` - The converted ban
    /// - `Err(AppError::InternalError)` - Stored status, duration type, or
    ///   evidence URL list does not parse
    pub fn from_entity(entity: entity::ban::Model) -> Result<Self, AppError> {
        let status = BanStatus::parse(&entity.status).ok_or_else(|| {
            AppError::InternalError(format!(
                "Unknown ban status '{}' for ban {}",
                entity.status, entity.id
            ))
        })?;

        let duration_type = BanDurationType::parse(&entity.duration_type).ok_or_else(|| {
            AppError::InternalError(format!(
                "Unknown ban duration type '{}' for ban {}",
                entity.duration_type, entity.id
            ))
        })?;

        let evidence_urls = match &entity.evidence_urls {
            Some(json) => serde_json::from_str(json).map_err(|e| {
                AppError::InternalError(format!(
                    "Invalid evidence URL list for ban {}: {}",
                    entity.id, e
                ))
            })?,
            None => Vec::new(),
        };

        Ok(Self {
            id: entity.id,
            player_name: entity.player_name,
            steam_id: entity.steam_id,
            discord_id: entity.discord_id,
            ip_address: entity.ip_address,
            reason: entity.reason,
            evidence: entity.evidence,
            evidence_urls,
            duration_type,
            duration_days: entity.duration_days,
            expires_at: entity.expires_at,
            status,
            issued_by: entity.issued_by,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Converts to the API shape, with the issuing user already resolved to
    /// a username-only summary by the query layer.
    pub fn into_dto(self, issued_by: Option<UserSummaryDto>) -> BanDto {
        BanDto {
            id: self.id,
            player_name: self.player_name,
            steam_id: self.steam_id,
            discord_id: self.discord_id,
            ip_address: self.ip_address,
            reason: self.reason,
            evidence: self.evidence,
            evidence_urls: self.evidence_urls,
            duration_type: self.duration_type.as_str().to_string(),
            duration_days: self.duration_days,
            expires_at: self.expires_at,
            status: self.status.as_str().to_string(),
            issued_by,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Short reference embedded into appeal responses.
    pub fn to_ref_dto(&self) -> BanRefDto {
        BanRefDto {
            id: self.id,
            player_name: self.player_name.clone(),
            steam_id: self.steam_id.clone(),
            status: self.status.as_str().to_string(),
        }
    }
}

/// Parameters for issuing a new ban.
///
/// Status is not a parameter: every ban starts `active` no matter what the
/// caller sends. `duration_days` must be range-checked at the boundary
/// before this reaches the service when the duration type is temporary.
#[derive(Debug, Clone)]
pub struct CreateBanParam {
    pub player_name: String,
    pub steam_id: String,
    pub discord_id: Option<String>,
    pub ip_address: Option<String>,
    pub reason: String,
    pub evidence: String,
    pub evidence_urls: Vec<String>,
    pub duration_type: BanDurationType,
    pub duration_days: Option<u32>,
    pub notes: Option<String>,
}

/// Partial-field merge for a ban update. `None` leaves a field untouched.
///
/// No invariant re-validation happens on update: changing the duration type
/// does not recompute or clear `expires_at`.
#[derive(Debug, Clone, Default)]
pub struct UpdateBanParam {
    pub player_name: Option<String>,
    pub steam_id: Option<String>,
    pub discord_id: Option<String>,
    pub ip_address: Option<String>,
    pub reason: Option<String>,
    pub evidence: Option<String>,
    pub evidence_urls: Option<Vec<String>>,
    pub duration_type: Option<BanDurationType>,
    pub duration_days: Option<i32>,
    pub expires_at: Option<DateTime<Utc>>,
    pub status: Option<BanStatus>,
    pub notes: Option<String>,
}

/// Filter and pagination inputs for the ban listing.
///
/// Omitted filters add no predicate; the free-text search matches player
/// name or steam id and combines with the equality filters by AND.
#[derive(Debug, Clone)]
pub struct BanFilterParam {
    pub status: Option<BanStatus>,
    pub steam_id: Option<String>,
    pub search: Option<String>,
    /// 1-indexed page number.
    pub page: u64,
    pub limit: u64,
    /// Sort column name; unknown names fall back to `created_at`.
    pub sort_by: String,
    pub sort_dir: SortDir,
}

impl Default for BanFilterParam {
    fn default() -> Self {
        Self {
            status: None,
            steam_id: None,
            search: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            sort_by: "created_at".to_string(),
            sort_dir: SortDir::Desc,
        }
    }
}
