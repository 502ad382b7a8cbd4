use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::DeletedDto,
        ban::{CreateBanDto, UpdateBanDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            ban::{BanDurationType, BanFilterParam, BanStatus, CreateBanParam, UpdateBanParam},
            page::{SortDir, DEFAULT_LIMIT, DEFAULT_PAGE},
        },
        service::ban::BanService,
        state::AppState,
    },
};

/// Longest temporary ban accepted, in days; anything longer should be
/// issued as permanent.
const MAX_DURATION_DAYS: u32 = 3650;

#[derive(Deserialize)]
pub struct ListBansParams {
    pub status: Option<String>,
    pub steam_id: Option<String>,
    pub search: Option<String>,
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
    pub sort_by: Option<String>,
    pub sort_dir: Option<String>,
}

fn default_page() -> u64 {
    DEFAULT_PAGE
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

#[derive(Deserialize)]
pub struct LookupBanParams {
    pub steam_id: String,
}

/// POST /api/bans - Issue a new ban.
///
/// Validates the request body, then creates a ban with status `active` and
/// the expiration derived from the duration input.
///
/// # Access Control
/// - `Admin` - Only admins can issue bans
///
/// # Returns
/// - `201 Created` - The created ban
/// - `400 Bad Request` - Missing required fields or inconsistent duration
/// - `401 Unauthorized` / `403 Forbidden` - Not logged in or not an admin
pub async fn create_ban(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateBanDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let param = validate_create(payload)?;

    let service = BanService::new(&state.db);
    let ban = service.create(param, user.id).await?;

    Ok((StatusCode::CREATED, Json(ban)))
}

/// GET /api/bans - List bans with filters and pagination.
///
/// # Access Control
/// - `Moderator` - Moderators and admins can browse bans
///
/// # Returns
/// - `200 OK` - `{items, total, page, limit}` envelope
pub async fn list_bans(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ListBansParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Moderator])
        .await?;

    let status = params
        .status
        .as_deref()
        .map(|s| {
            BanStatus::parse(s)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown ban status '{}'", s)))
        })
        .transpose()?;

    let filter = BanFilterParam {
        status,
        steam_id: params.steam_id,
        search: params.search,
        page: params.page,
        limit: params.limit,
        sort_by: params.sort_by.unwrap_or_else(|| "created_at".to_string()),
        sort_dir: params
            .sort_dir
            .as_deref()
            .map(SortDir::parse)
            .unwrap_or_default(),
    };

    let service = BanService::new(&state.db);
    let page = service.list(filter).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// GET /api/bans/lookup?steam_id= - Check whether a ban is in effect.
///
/// Returns the ban currently in effect for the identifier, or `null` when
/// there is none. Any logged-in user may perform the check.
///
/// # Returns
/// - `200 OK` - The active ban, or `null`
pub async fn lookup_ban(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<LookupBanParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    if params.steam_id.trim().is_empty() {
        return Err(AppError::BadRequest("steam_id must not be empty".to_string()));
    }

    let service = BanService::new(&state.db);
    let ban = service
        .find_active_by_steam_id(&params.steam_id, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(ban)))
}

/// GET /api/bans/{id} - Get a ban with its appeals.
///
/// # Access Control
/// - `Moderator` - Moderators and admins can view ban details
///
/// # Returns
/// - `200 OK` - Ban with embedded appeals
/// - `404 Not Found` - No ban with that id
pub async fn get_ban(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Moderator])
        .await?;

    let service = BanService::new(&state.db);
    let details = service.get(id).await?;

    Ok((StatusCode::OK, Json(details)))
}

/// PATCH /api/bans/{id} - Partially update a ban.
///
/// Absent fields stay untouched. No invariant re-validation happens here:
/// changing the duration type does not recompute the expiration.
///
/// # Access Control
/// - `Admin` - Only admins can edit bans
///
/// # Returns
/// - `200 OK` - The updated ban
/// - `400 Bad Request` - Unknown status or duration type value
/// - `404 Not Found` - No ban with that id
pub async fn update_ban(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBanDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let status = payload
        .status
        .as_deref()
        .map(|s| {
            BanStatus::parse(s)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown ban status '{}'", s)))
        })
        .transpose()?;
    let duration_type = payload
        .duration_type
        .as_deref()
        .map(|s| {
            BanDurationType::parse(s)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown duration type '{}'", s)))
        })
        .transpose()?;

    let param = UpdateBanParam {
        player_name: payload.player_name,
        steam_id: payload.steam_id,
        discord_id: payload.discord_id,
        ip_address: payload.ip_address,
        reason: payload.reason,
        evidence: payload.evidence,
        evidence_urls: payload.evidence_urls,
        duration_type,
        duration_days: payload.duration_days,
        expires_at: payload.expires_at,
        status,
        notes: payload.notes,
    };

    let service = BanService::new(&state.db);
    let ban = service.update(id, param).await?;

    Ok((StatusCode::OK, Json(ban)))
}

/// DELETE /api/bans/{id} - Delete a ban.
///
/// Appeals referencing the ban are kept and render with a missing ban
/// reference.
///
/// # Access Control
/// - `Admin` - Only admins can delete bans
///
/// # Returns
/// - `200 OK` - `{deleted: true}`
/// - `404 Not Found` - No ban with that id
pub async fn delete_ban(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = BanService::new(&state.db);
    service.delete(id).await?;

    Ok((StatusCode::OK, Json(DeletedDto { deleted: true })))
}

fn validate_create(payload: CreateBanDto) -> Result<CreateBanParam, AppError> {
    if payload.player_name.trim().is_empty() {
        return Err(AppError::BadRequest("player_name must not be empty".to_string()));
    }
    if payload.steam_id.trim().is_empty() {
        return Err(AppError::BadRequest("steam_id must not be empty".to_string()));
    }
    if payload.reason.trim().is_empty() {
        return Err(AppError::BadRequest("reason must not be empty".to_string()));
    }

    let duration_type = BanDurationType::parse(&payload.duration_type).ok_or_else(|| {
        AppError::BadRequest(format!("Unknown duration type '{}'", payload.duration_type))
    })?;

    if duration_type == BanDurationType::Temporary
        && !payload
            .duration_days
            .is_some_and(|d| (1..=MAX_DURATION_DAYS).contains(&d))
    {
        return Err(AppError::BadRequest(format!(
            "duration_days must be between 1 and {} for temporary bans",
            MAX_DURATION_DAYS
        )));
    }

    Ok(CreateBanParam {
        player_name: payload.player_name,
        steam_id: payload.steam_id,
        discord_id: payload.discord_id,
        ip_address: payload.ip_address,
        reason: payload.reason,
        evidence: payload.evidence,
        evidence_urls: payload.evidence_urls,
        duration_type,
        duration_days: payload.duration_days,
        notes: payload.notes,
    })
}
