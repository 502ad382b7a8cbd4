use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::DeletedDto,
        appeal::{CreateAppealDto, UpdateAppealDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            appeal::{AppealFilterParam, AppealStatus, CreateAppealParam, UpdateAppealParam},
            page::{SortDir, DEFAULT_LIMIT, DEFAULT_PAGE},
        },
        service::appeal::AppealService,
        state::AppState,
    },
};

#[derive(Deserialize)]
pub struct ListAppealsParams {
    pub status: Option<String>,
    pub ban_id: Option<i32>,
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

/// POST /api/appeals - Submit an appeal against a ban.
///
/// Any logged-in user may appeal. The appeal starts `pending`; the ban id is
/// not checked for existence, so an appeal may outlive its ban.
///
/// # Returns
/// - `201 Created` - The created appeal
/// - `400 Bad Request` - Empty reason or evidence
/// - `401 Unauthorized` - Not logged in
pub async fn create_appeal(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAppealDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    if payload.reason.trim().is_empty() {
        return Err(AppError::BadRequest("reason must not be empty".to_string()));
    }
    if payload.evidence.trim().is_empty() {
        return Err(AppError::BadRequest("evidence must not be empty".to_string()));
    }

    let service = AppealService::new(&state.db);
    let appeal = service
        .create(
            CreateAppealParam {
                ban_id: payload.ban_id,
                reason: payload.reason,
                evidence: payload.evidence,
            },
            user.id,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(appeal)))
}

/// GET /api/appeals - List appeals with filters and pagination.
///
/// # Access Control
/// - `Moderator` - Moderators and admins review appeals
///
/// # Returns
/// - `200 OK` - `{items, total, page, limit}` envelope
pub async fn list_appeals(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ListAppealsParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Moderator])
        .await?;

    let status = params
        .status
        .as_deref()
        .map(|s| {
            AppealStatus::parse(s)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown appeal status '{}'", s)))
        })
        .transpose()?;

    let filter = AppealFilterParam {
        status,
        ban_id: params.ban_id,
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

    let service = AppealService::new(&state.db);
    let page = service.list(filter).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// GET /api/appeals/{id} - Get an appeal.
///
/// # Access Control
/// - `Moderator` - Moderators and admins can view appeals
///
/// # Returns
/// - `200 OK` - The appeal with references resolved
/// - `404 Not Found` - No appeal with that id
pub async fn get_appeal(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Moderator])
        .await?;

    let service = AppealService::new(&state.db);
    let appeal = service.get(id).await?;

    Ok((StatusCode::OK, Json(appeal)))
}

/// PATCH /api/appeals/{id} - Review or edit an appeal.
///
/// When the update sets a terminal status the acting moderator is stamped
/// as the reviewer. Approving an appeal does not touch the ban; lifting it
/// is a separate ban update.
///
/// # Access Control
/// - `Moderator` - Moderators and admins review appeals
///
/// # Returns
/// - `200 OK` - The updated appeal
/// - `400 Bad Request` - Unknown status value
/// - `404 Not Found` - No appeal with that id
pub async fn update_appeal(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAppealDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Moderator])
        .await?;

    let status = payload
        .status
        .as_deref()
        .map(|s| {
            AppealStatus::parse(s)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown appeal status '{}'", s)))
        })
        .transpose()?;

    let reviewed_by = status.filter(AppealStatus::is_terminal).map(|_| user.id);

    let param = UpdateAppealParam {
        reason: payload.reason,
        evidence: payload.evidence,
        status,
        reviewed_by,
        review_notes: payload.review_notes,
    };

    let service = AppealService::new(&state.db);
    let appeal = service.update(id, param).await?;

    Ok((StatusCode::OK, Json(appeal)))
}

/// DELETE /api/appeals/{id} - Delete an appeal.
///
/// # Access Control
/// - `Admin` - Only admins can delete appeals
///
/// # Returns
/// - `200 OK` - `{deleted: true}`
/// - `404 Not Found` - No appeal with that id
pub async fn delete_appeal(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = AppealService::new(&state.db);
    service.delete(id).await?;

    Ok((StatusCode::OK, Json(DeletedDto { deleted: true })))
}
